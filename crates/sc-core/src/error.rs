//! Error types for sc-core

use thiserror::Error;

/// Core error type for Spendcluster
///
/// Every variant here is fatal to startup: the service never begins
/// accepting traffic with a required table missing or unparseable.
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Required input table not found
    #[error("[E001] Required table not found: {path}")]
    TableNotFound { path: String },

    /// E002: Failed to read or parse a required CSV table
    #[error("[E002] Failed to read {path}: {message}")]
    TableReadError { path: String, message: String },

    /// E003: A row could not be deserialized into the expected schema
    #[error("[E003] Bad row in {path}: {message}")]
    RowParseError { path: String, message: String },

    /// E004: Data directory does not exist
    #[error("[E004] Data directory not found: {path}")]
    DataDirNotFound { path: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
