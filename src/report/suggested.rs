//! Well-known builders and trust.

use crate::config::Config;
use crate::constants::BIN_NAME;
use crate::render::ColumnWriter;

/// A builder recommended to users who have not picked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedBuilder {
    pub vendor: &'static str,
    pub image: &'static str,
    /// Shown when the registry has no description for the image
    pub default_description: &'static str,
}

pub const SUGGESTED_BUILDERS: &[SuggestedBuilder] = &[
    SuggestedBuilder {
        vendor: "Google",
        image: "gcr.io/buildpacks/builder:v1",
        default_description: "Ubuntu 18 base image with buildpacks for .NET, Go, Java, Node.js, and Python",
    },
    SuggestedBuilder {
        vendor: "Heroku",
        image: "heroku/buildpacks:18",
        default_description: "heroku-18 base image with buildpacks for Ruby, Java, Node.js, Python, Golang, & PHP",
    },
    SuggestedBuilder {
        vendor: "Paketo Buildpacks",
        image: "paketobuildpacks/builder:base",
        default_description: "Ubuntu bionic base image with buildpacks for Java, .NET Core, NodeJS, Go, Ruby, NGINX and Procfile",
    },
    SuggestedBuilder {
        vendor: "Paketo Buildpacks",
        image: "paketobuildpacks/builder:full",
        default_description: "Ubuntu bionic base image with buildpacks for Java, .NET Core, NodeJS, Go, PHP, Ruby, Apache HTTPD, NGINX and Procfile",
    },
    SuggestedBuilder {
        vendor: "Paketo Buildpacks",
        image: "paketobuildpacks/builder:tiny",
        default_description: "Tiny base image (bionic build image, distroless-like run image) with buildpacks for Java Native Image and Go",
    },
];

const PADDING: usize = 4;

pub fn is_suggested_builder(image: &str) -> bool {
    SUGGESTED_BUILDERS.iter().any(|builder| builder.image == image)
}

/// A builder is trusted when it is suggested or trusted in the config.
pub fn is_trusted(image: &str, config: &Config) -> bool {
    is_suggested_builder(image) || config.is_trusted_builder(image)
}

/// Render the suggested builders table followed by a usage tip.
///
/// `described` pairs each builder with the description to show.
pub fn render_suggested_builders(described: &[(SuggestedBuilder, String)]) -> String {
    let mut writer = ColumnWriter::new(PADDING);
    writer.push_line("Suggested builders:");
    for (builder, description) in described {
        writer.push_row([
            format!("  {}:", builder.vendor),
            format!("'{}'", builder.image),
            description.clone(),
        ]);
    }
    writer.push_line("");
    writer.push_line("Tip: Learn more about a specific builder with:");
    writer.push_line(format!("\t{BIN_NAME} inspect-builder <builder-image>"));
    writer.finish()
}

/// Shown when no builder was given and none is configured.
pub fn select_default_builder_hint() -> String {
    format!("Please select a default builder with:\n\n\t{BIN_NAME} set-default-builder <builder-image>\n")
}
