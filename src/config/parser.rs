//! Generic configuration parsing utilities.
//!
//! Reads a TOML file and deserializes it into any
//! [`DeserializeOwned`](serde::de::DeserializeOwned) type, attaching the file
//! path to both read and parse failures:
//!
//! ```text
//! Failed to parse config file: /home/me/.builder-inspect/config.toml
//! Caused by:
//!     invalid type: integer `1`, expected a string for key `default-builder`
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::InspectError;

/// Parse a TOML configuration file into `T`.
///
/// Syntax and type errors surface as [`InspectError::TomlError`].
///
/// ```rust,no_run
/// use builder_inspect::config::{Config, parse_config};
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config: Config = parse_config(Path::new("config.toml")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .map_err(InspectError::from)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
