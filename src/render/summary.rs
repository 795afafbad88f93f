//! Buildpack table and lifecycle API summary.

use super::{ColumnWriter, InspectWarning, NONE, Section};
use crate::builder::LifecycleDescriptor;
use crate::dist::BuildpackInfo;
use crate::version::ApiSet;

const TABLE_PADDING: usize = 8;
const INDENT: &str = "  ";

/// Render the flat buildpack list as an aligned `ID VERSION HOMEPAGE` table.
///
/// Rows keep input order. A missing homepage leaves the last column empty.
pub fn render_buildpack_table(buildpacks: &[BuildpackInfo]) -> Section {
    let mut writer = ColumnWriter::new(TABLE_PADDING);
    writer.push_line("Buildpacks:");

    if buildpacks.is_empty() {
        writer.push_line(format!("{INDENT}{NONE}"));
        return Section::new(writer.finish()).with_warning(InspectWarning::NoBuildpacks);
    }

    writer.push_row([format!("{INDENT}ID"), "VERSION".to_string(), "HOMEPAGE".to_string()]);
    for buildpack in buildpacks {
        writer.push_row([
            format!("{INDENT}{}", buildpack.identity.id),
            buildpack.identity.version.clone(),
            buildpack.homepage.clone().unwrap_or_default(),
        ]);
    }

    Section::new(writer.finish())
}

/// Render the lifecycle version and the API versions it deprecates and supports.
pub fn render_api_summary(lifecycle: &LifecycleDescriptor) -> Section {
    let mut warnings = Vec::new();
    let mut text = String::from("Lifecycle:\n");

    match &lifecycle.version {
        Some(version) => {
            text.push_str(&format!("{INDENT}Version: {version}\n"));
        }
        None => {
            text.push_str(&format!("{INDENT}Version: {NONE}\n"));
            warnings.push(InspectWarning::NoLifecycleVersion);
        }
    }

    let families = [
        ("Buildpack APIs", &lifecycle.apis.buildpack, InspectWarning::NoBuildpackApis),
        ("Platform APIs", &lifecycle.apis.platform, InspectWarning::NoPlatformApis),
    ];
    for (label, apis, missing) in families {
        text.push_str(&format!("{INDENT}{label}:\n"));
        text.push_str(&format!("{INDENT}{INDENT}Deprecated: {}\n", join_versions(&apis.deprecated)));
        text.push_str(&format!("{INDENT}{INDENT}Supported: {}\n", join_versions(&apis.supported)));
        if apis.supported.is_empty() {
            warnings.push(missing);
        }
    }

    Section {
        text,
        warnings,
    }
}

fn join_versions(set: &ApiSet) -> String {
    if set.is_empty() {
        NONE.to_string()
    } else {
        set.as_strings().join(", ")
    }
}
