//! Test utilities for builder-inspect
//!
//! Shared fixtures, an in-memory [`MockProvider`] and one-time logging setup.
//! Compiled for unit tests and, through the `test-utils` feature, for the
//! integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use builder_inspect::test_utils::{MockProvider, fixtures};
//!
//! let provider = MockProvider::default()
//!     .with_remote("some/image", Ok(Some(fixtures::remote_builder_info())))
//!     .with_local("some/image", Err("daemon unavailable".to_string()));
//! ```

pub mod fixtures;

pub use fixtures::CatalogFixture;

use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::builder::BuilderInfo;
use crate::provider::MetadataProvider;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=builder_inspect=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Canned lookup results keyed by `(image, daemon)`.
///
/// Unregistered lookups answer `Ok(None)`. Errors are stored as strings so the
/// provider stays `Clone`.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    responses: HashMap<(String, bool), Result<Option<BuilderInfo>, String>>,
}

impl MockProvider {
    #[must_use]
    pub fn with_remote(
        mut self,
        image: &str,
        response: Result<Option<BuilderInfo>, String>,
    ) -> Self {
        self.responses.insert((image.to_string(), false), response);
        self
    }

    #[must_use]
    pub fn with_local(mut self, image: &str, response: Result<Option<BuilderInfo>, String>) -> Self {
        self.responses.insert((image.to_string(), true), response);
        self
    }
}

impl MetadataProvider for MockProvider {
    fn inspect_builder(
        &self,
        name: &str,
        daemon: bool,
    ) -> impl Future<Output = Result<Option<BuilderInfo>>> + Send {
        let response = match self.responses.get(&(name.to_string(), daemon)) {
            Some(Ok(info)) => Ok(info.clone()),
            Some(Err(message)) => Err(anyhow::anyhow!("{message}")),
            None => Ok(None),
        };
        async move { response }
    }
}
