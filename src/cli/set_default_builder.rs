//! Store the builder used when `inspect-builder` is given no image.

use anyhow::Result;
use clap::Args;
use std::path::Path;
use tracing::info;

use super::CliConfig;
use crate::config::Config;

/// Command to set `default-builder` in the config file.
#[derive(Args, Debug)]
pub struct SetDefaultBuilderCommand {
    /// Builder image to use by default
    image: String,
}

impl SetDefaultBuilderCommand {
    pub async fn execute_with_config(self, cli: &CliConfig) -> Result<()> {
        let path = match &cli.config_path {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        set_default_builder(&path, &self.image).await?;
        println!("Builder '{}' is now the default builder", self.image);
        Ok(())
    }
}

/// Update `default-builder` in the config at `path`, keeping other settings.
async fn set_default_builder(path: &Path, image: &str) -> Result<()> {
    let mut config = Config::load_from(path).await?;
    config.set_default_builder(image);
    config.save_to(path).await?;
    info!(builder = image, path = %path.display(), "Default builder updated");
    Ok(())
}
