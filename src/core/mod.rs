//! Core types for builder-inspect
//!
//! Everything here is shared by the library modules and the CLI. At present
//! that is the error system:
//!
//! - [`InspectError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! Library code returns [`InspectError`] where it can fail. Command handlers use
//! [`anyhow::Result`] and add context on the way up; `main` is the only place
//! that turns errors into terminal output.

pub mod error;

pub use error::{ErrorContext, InspectError, user_friendly_error};
