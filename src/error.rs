//! Error types for host and fixture interop
//!
//! The rule table itself is infallible; the only failure surfaces are the
//! string conversions used when records or configuration arrive from a host
//! in textual form.

use thiserror::Error;

/// Errors produced while interpreting host-supplied textual values
#[derive(Error, Debug)]
pub enum StyleError {
    #[error(
        "Unknown import kind '{value}'. Expected one of: import, require, import-equals, import-type"
    )]
    UnknownImportKind { value: String },

    #[error("Unknown collation '{value}'. Expected: unicode")]
    UnknownCollation { value: String },
}

/// Result type alias for style operations
pub type StyleResult<T> = Result<T, StyleError>;
