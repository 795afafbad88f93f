//! Integration test suite for builder-inspect
//!
//! End-to-end tests that drive the compiled binary against a metadata catalog
//! and config file written into a temporary directory.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **inspect_builder**: Full reports, default builder, depth and failures
//! - **suggest_builders**: Suggested builders table
//! - **set_default_builder**: Updating the config file

mod inspect_builder;
mod set_default_builder;
mod suggest_builders;

use assert_cmd::Command;
use builder_inspect::config::Config;
use builder_inspect::constants::{CONFIG_ENV, METADATA_ENV};
use builder_inspect::test_utils::CatalogFixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home holding `builders.json` and `config.toml`.
pub struct TestEnv {
    temp: TempDir,
    catalog_path: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    /// Environment populated with [`CatalogFixture::sample`].
    pub fn new() -> Self {
        Self::with_fixture(CatalogFixture::sample())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_fixture(CatalogFixture::sample().with_config(config))
    }

    pub fn with_fixture(fixture: CatalogFixture) -> Self {
        let temp = TempDir::new().unwrap();
        let (catalog_path, config_path) = fixture.write_to(temp.path()).unwrap();
        Self {
            temp,
            catalog_path,
            config_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The binary, isolated from the real home directory and wired to this
    /// environment's catalog and config through their environment variables.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("builder-inspect").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env(CONFIG_ENV, &self.config_path)
            .env(METADATA_ENV, &self.catalog_path);
        cmd
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).unwrap()
    }
}
