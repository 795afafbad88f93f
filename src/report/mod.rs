//! Full inspection report for one builder image.
//!
//! The report stitches the core sections (lifecycle summary, buildpack table,
//! detection order tree) together with the builder's descriptive metadata,
//! its run images and whether it is trusted. Each location (registry or
//! daemon) is rendered as its own view:
//!
//! ```text
//!
//! REMOTE:
//!
//! Description: Some remote description
//!
//! Trusted: No
//!
//! Stack:
//!   ID: test.stack.id
//! ...
//! ```
//!
//! Warnings raised by any section are appended after the view.

pub mod suggested;

pub use suggested::{
    SUGGESTED_BUILDERS, SuggestedBuilder, is_suggested_builder, is_trusted,
    render_suggested_builders, select_default_builder_hint,
};

use std::fmt;

use crate::builder::BuilderInfo;
use crate::config::Config;
use crate::constants::DETECTION_ORDER_TITLE;
use crate::render::{
    ColumnWriter, InspectWarning, NONE, Section, render_api_summary, render_buildpack_table,
    render_detection_order,
};
use crate::resolver::{MaxDepth, resolve_order};

const RUN_IMAGE_PADDING: usize = 4;
const INDENT: &str = "  ";

/// Where a builder image was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The image registry
    Remote,
    /// The local daemon
    Local,
}

impl Location {
    /// Whether lookups for this location go to the daemon.
    pub fn is_daemon(self) -> bool {
        matches!(self, Self::Local)
    }

    fn title(self) -> &'static str {
        match self {
            Self::Remote => "REMOTE",
            Self::Local => "LOCAL",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Remote => "remote",
            Self::Local => "local",
        })
    }
}

/// Presentation switches for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include stack mixins
    pub verbose: bool,
    pub max_depth: MaxDepth,
}

/// Render the body of one view: every section, blank-line separated.
pub fn render_builder_info(
    image: &str,
    info: &BuilderInfo,
    config: &Config,
    options: ReportOptions,
) -> Section {
    let mut blocks = Vec::new();
    let mut warnings = Vec::new();

    if !info.description.is_empty() {
        blocks.push(format!("Description: {}\n", info.description));
    }

    if !info.created_by.is_empty() {
        blocks.push(format!(
            "Created By:\n{INDENT}Name: {}\n{INDENT}Version: {}\n",
            info.created_by.name, info.created_by.version
        ));
    }

    let trusted = if is_trusted(image, config) { "Yes" } else { "No" };
    blocks.push(format!("Trusted: {trusted}\n"));

    blocks.push(render_stack(info, options.verbose));

    let tree = resolve_order(&info.order, &info.buildpack_layers, options.max_depth);
    let sections = [
        render_api_summary(&info.lifecycle),
        render_run_images(info, config),
        render_buildpack_table(&info.buildpacks),
        render_detection_order(&tree.groups, DETECTION_ORDER_TITLE),
    ];
    for section in sections {
        warnings.extend(section.warnings);
        blocks.push(section.text);
    }

    Section {
        text: blocks.join("\n"),
        warnings,
    }
}

/// Render one complete view, including its title and warnings.
///
/// `outcome` is the provider's answer for this location.
pub fn render_view(
    location: Location,
    image: &str,
    outcome: &anyhow::Result<Option<BuilderInfo>>,
    config: &Config,
    options: ReportOptions,
) -> String {
    let mut out = format!("\n{}:\n", location.title());
    match outcome {
        Err(e) => {
            out.push_str(&format!("ERROR: inspecting {location} image '{image}': {e}\n"));
        }
        Ok(None) => {
            out.push_str("(not present)\n");
        }
        Ok(Some(info)) => {
            let section = render_builder_info(image, info, config, options);
            out.push('\n');
            out.push_str(&section.text);
            if !section.warnings.is_empty() {
                out.push('\n');
                for warning in &section.warnings {
                    out.push_str(&format!("{}\n", warning.message(image)));
                }
            }
        }
    }
    out
}

fn render_stack(info: &BuilderInfo, verbose: bool) -> String {
    let mut text = format!("Stack:\n{INDENT}ID: {}\n", info.stack);
    if verbose && !info.mixins.is_empty() {
        text.push_str(&format!("{INDENT}Mixins:\n"));
        for mixin in &info.mixins {
            text.push_str(&format!("{INDENT}{INDENT}{mixin}\n"));
        }
    }
    text
}

/// Run images: user-configured mirrors first, then the builder's own.
fn render_run_images(info: &BuilderInfo, config: &Config) -> Section {
    let mut writer = ColumnWriter::new(RUN_IMAGE_PADDING);
    writer.push_line("Run Images:");

    let local_mirrors =
        if info.run_image.is_empty() { &[][..] } else { config.local_mirrors(&info.run_image) };

    if info.run_image.is_empty() && info.run_image_mirrors.is_empty() && local_mirrors.is_empty() {
        writer.push_line(format!("{INDENT}{NONE}"));
        return Section::new(writer.finish()).with_warning(InspectWarning::NoRunImage);
    }

    for mirror in local_mirrors {
        writer.push_row([format!("{INDENT}{mirror}"), "(user-configured)".to_string()]);
    }
    if !info.run_image.is_empty() {
        writer.push_line(format!("{INDENT}{}", info.run_image));
    }
    for mirror in &info.run_image_mirrors {
        writer.push_line(format!("{INDENT}{mirror}"));
    }

    let section = Section::new(writer.finish());
    if info.run_image.is_empty() {
        section.with_warning(InspectWarning::NoRunImage)
    } else {
        section
    }
}
