//! User configuration for builder-inspect
//!
//! A single TOML file holds the settings that change how builders are
//! presented:
//!
//! ```toml
//! default-builder = "paketobuildpacks/builder:base"
//!
//! [[run-images]]
//! image = "some/run-image"
//! mirrors = ["first/local", "second/local"]
//!
//! [[trusted-builders]]
//! name = "trusted/builder"
//! ```
//!
//! **Location:**
//! - Unix/macOS: `~/.builder-inspect/config.toml`
//! - Windows: `%LOCALAPPDATA%\builder-inspect\config.toml`
//!
//! The `--config` flag (or `BUILDER_INSPECT_CONFIG`) points elsewhere. A
//! missing file is not an error; it reads as the default configuration.
//!
//! The default metadata catalog, `builders.json`, lives next to the config
//! file.

mod parser;

pub use parser::parse_config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::core::InspectError;

const CONFIG_DIR: &str = ".builder-inspect";
const CONFIG_FILE: &str = "config.toml";
const CATALOG_FILE: &str = "builders.json";

/// Locally configured mirrors for one run image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunImageMirrors {
    pub image: String,
    #[serde(default)]
    pub mirrors: Vec<String>,
}

/// A builder the user has chosen to trust.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedBuilder {
    pub name: String,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_builder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run_images: Vec<RunImageMirrors>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted_builders: Vec<TrustedBuilder>,
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A file that does not exist yields [`Config::default`].
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        Self::load_from(&path).await
    }

    /// Load from a specific path; missing files read as the default config.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let exists = fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check config file: {}", path.display()))?;
        if !exists {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        parse_config(path).await
    }

    /// Write the config as TOML, creating parent directories as needed.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Directory holding the config file and the default catalog.
    pub fn default_dir() -> Result<PathBuf> {
        let dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| InspectError::ConfigError {
                    message: "Unable to determine local data directory".to_string(),
                })?
                .join("builder-inspect")
        } else {
            dirs::home_dir()
                .ok_or_else(|| InspectError::ConfigError {
                    message: "Unable to determine home directory".to_string(),
                })?
                .join(CONFIG_DIR)
        };
        Ok(dir)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::default_dir()?.join(CONFIG_FILE))
    }

    /// Default location of the JSON metadata catalog.
    pub fn default_catalog_path() -> Result<PathBuf> {
        Ok(Self::default_dir()?.join(CATALOG_FILE))
    }

    /// User-configured mirrors for `image`, in configured order.
    pub fn local_mirrors(&self, image: &str) -> &[String] {
        self.run_images
            .iter()
            .find(|run_image| run_image.image == image)
            .map(|run_image| run_image.mirrors.as_slice())
            .unwrap_or_default()
    }

    /// Whether the user has explicitly trusted `builder`.
    pub fn is_trusted_builder(&self, builder: &str) -> bool {
        self.trusted_builders.iter().any(|trusted| trusted.name == builder)
    }

    /// Set `default-builder`.
    pub fn set_default_builder(&mut self, builder: impl Into<String>) {
        self.default_builder = Some(builder.into());
    }
}
