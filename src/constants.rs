//! Global constants used throughout builder-inspect.

/// Executable name used in user-facing hints.
pub const BIN_NAME: &str = "builder-inspect";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BUILDER_INSPECT_CONFIG";

/// Environment variable pointing at the metadata catalog.
pub const METADATA_ENV: &str = "BUILDER_INSPECT_METADATA";

/// Title of the detection order section.
pub const DETECTION_ORDER_TITLE: &str = "Detection Order:";
