//! # hostman core
//!
//! Core data models, error types, and field validation for the SSH host
//! store. This crate defines the canonical types that the other crates
//! depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - The [`HostEntry`](models::HostEntry) record and its defaults
//! - [`error`] - The [`Error`] enum and [`Result`] alias
//! - [`validation`] - Field-syntax validation for entries before they reach the store
//!
//! ## Error Handling
//!
//! ```
//! use hostman_core::prelude::*;
//!
//! fn lookup() -> Result<()> {
//!     let _err = Error::host_not_found("staging-db");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod validation;

pub use error::{Error, Result};
pub use models::{DEFAULT_PORT, HostEntry};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_entry};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{DEFAULT_PORT, HostEntry};
    pub use crate::validation::{
        Severity, ValidationIssue, ValidationReport, validate_entry,
    };
}
