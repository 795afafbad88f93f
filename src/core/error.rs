//! Error handling for builder-inspect
//!
//! This module provides the strongly-typed errors raised by the library and the
//! user-facing rendering of any error that reaches the CLI.
//!
//! # Architecture
//!
//! - [`InspectError`] - Enumerated failure cases
//! - [`ErrorContext`] - Wrapper adding a suggestion and details for CLI users
//!
//! Library code returns `Result<_, InspectError>`; command code works with
//! [`anyhow::Result`] and attaches context as errors bubble up. At the top of
//! `main`, [`user_friendly_error`] turns whatever arrived into an
//! [`ErrorContext`] and prints it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use builder_inspect::core::{InspectError, user_friendly_error};
//!
//! let error = InspectError::BuilderNotFound {
//!     name: "some/image".to_string(),
//! };
//! user_friendly_error(anyhow::Error::from(error)).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for builder inspection
#[derive(Error, Debug)]
pub enum InspectError {
    /// Neither the local nor the remote view of a builder exists
    #[error("Unable to find builder '{name}' locally or remotely.")]
    BuilderNotFound {
        /// Image name as given by the user
        name: String,
    },

    /// No builder argument and no `default-builder` in the config
    #[error("No default builder is configured")]
    NoDefaultBuilder,

    /// A requested depth was negative
    #[error("Invalid depth {depth}: depth must not be negative")]
    InvalidDepth {
        /// Raw depth as supplied
        depth: i64,
    },

    /// An API version string could not be parsed as `major.minor`
    #[error("Invalid API version: {version}")]
    InvalidApiVersion {
        /// Raw version string
        version: String,
    },

    /// The metadata catalog exists but is malformed
    #[error("Invalid metadata catalog {file}: {reason}")]
    MetadataParseError {
        /// Path of the catalog
        file: String,
        /// Parser message
        reason: String,
    },

    /// The metadata catalog file does not exist
    #[error("Metadata catalog not found: {path}")]
    MetadataNotFound {
        /// Path that was tried
        path: String,
    },

    /// Configuration could not be resolved
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for InspectError {
    fn clone(&self) -> Self {
        match self {
            Self::BuilderNotFound {
                name,
            } => Self::BuilderNotFound {
                name: name.clone(),
            },
            Self::NoDefaultBuilder => Self::NoDefaultBuilder,
            Self::InvalidDepth {
                depth,
            } => Self::InvalidDepth {
                depth: *depth,
            },
            Self::InvalidApiVersion {
                version,
            } => Self::InvalidApiVersion {
                version: version.clone(),
            },
            Self::MetadataParseError {
                file,
                reason,
            } => Self::MetadataParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::MetadataNotFound {
                path,
            } => Self::MetadataNotFound {
                path: path.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            // The wrapped parser error is not Clone; keep its message.
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// An [`InspectError`] with optional user guidance.
///
/// ```rust,no_run
/// use builder_inspect::core::{ErrorContext, InspectError};
///
/// let context = ErrorContext::new(InspectError::NoDefaultBuilder)
///     .with_suggestion("Run 'builder-inspect set-default-builder <builder-image>'");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: InspectError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: InspectError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add background details, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Known [`InspectError`] variants and IO errors get tailored guidance. When
/// an [`InspectError`] was wrapped with context, the outermost message becomes
/// the details. Anything else keeps its message plus the full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(context) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: context.error.clone(),
            suggestion: context.suggestion.clone(),
            details: context.details.clone(),
        };
    }

    if let Some(inspect_error) = error.downcast_ref::<InspectError>() {
        let context = create_error_context(inspect_error);
        let outer = error.to_string();
        if context.details.is_none() && outer != inspect_error.to_string() {
            return context.with_details(outer);
        }
        return context;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(InspectError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check the ownership and permissions of the config and metadata files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(InspectError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(InspectError::Other {
        message,
    })
}

fn create_error_context(error: &InspectError) -> ErrorContext {
    match error {
        InspectError::BuilderNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check the image name, or add the builder to your metadata catalog"),

        InspectError::NoDefaultBuilder => ErrorContext::new(error.clone())
            .with_suggestion("Run 'builder-inspect set-default-builder <builder-image>' or pass an image explicitly"),

        InspectError::InvalidDepth { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Pass a --depth of 0 or more, or omit it to show the full detection order"),

        InspectError::MetadataNotFound { path } => ErrorContext::new(error.clone())
            .with_suggestion("Pass --metadata <PATH> or set BUILDER_INSPECT_METADATA")
            .with_details(format!("No metadata catalog exists at {path}")),

        InspectError::MetadataParseError { file, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check that {file} is a JSON object of the form {{\"builders\": {{\"<image>\": {{\"local\": ..., \"remote\": ...}}}}}}"
            )),

        InspectError::TomlError(_) => ErrorContext::new(error.clone()).with_suggestion(
            "Check the TOML syntax of your config file. Verify quotes, brackets, and key names",
        ),

        InspectError::ConfigError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Set HOME, or pass --config <PATH> and --metadata <PATH> explicitly"),

        _ => ErrorContext::new(error.clone()),
    }
}
