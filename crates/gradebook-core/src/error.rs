//! Error types and exit codes for gradebook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed input)
//! - 3: Data/store error (missing store, duplicate or unknown student)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the gradebook binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, duplicate or unknown record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for GradeError {
    fn from(err: rusqlite::Error) -> Self {
        GradeError::StoreUnavailable {
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur during gradebook operations
#[derive(Error, Debug)]
pub enum GradeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {field}: {value}")]
    InvalidInput { field: String, value: String },

    // Data/store errors (exit code 3)
    #[error("student id already exists: {id}")]
    DuplicateIdentifier { id: String },

    #[error("student not found: {id}")]
    NotFound { id: String },

    #[error("store not found at {path:?} (run `gradebook init`)")]
    StoreNotFound { path: PathBuf },

    #[error("store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GradeError {
    /// Create an error for a failed database operation.
    ///
    /// Any SQLite failure makes the store unusable for the operation, so this
    /// is always `StoreUnavailable` (exit code 3).
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        GradeError::StoreUnavailable {
            reason: format!("failed to {}: {}", operation, error),
        }
    }

    /// Create an error for a failed field extraction from a database row
    pub fn field_extraction(field: &str, error: impl std::fmt::Display) -> Self {
        Self::db_operation(&format!("read {}", field), error)
    }

    /// Create an error for malformed caller input
    pub fn invalid_input(field: &str, value: impl std::fmt::Display) -> Self {
        GradeError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn duplicate(id: &str) -> Self {
        GradeError::DuplicateIdentifier { id: id.to_string() }
    }

    pub fn not_found(id: &str) -> Self {
        GradeError::NotFound { id: id.to_string() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GradeError::UnknownFormat(_)
            | GradeError::DuplicateFormat
            | GradeError::UsageError(_)
            | GradeError::InvalidInput { .. } => ExitCode::Usage,

            GradeError::DuplicateIdentifier { .. }
            | GradeError::NotFound { .. }
            | GradeError::StoreNotFound { .. }
            | GradeError::StoreUnavailable { .. } => ExitCode::Data,

            GradeError::Io(_)
            | GradeError::Json(_)
            | GradeError::Toml(_)
            | GradeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GradeError::UnknownFormat(_) => "unknown_format",
            GradeError::DuplicateFormat => "duplicate_format",
            GradeError::UsageError(_) => "usage_error",
            GradeError::InvalidInput { .. } => "invalid_input",
            GradeError::DuplicateIdentifier { .. } => "duplicate_identifier",
            GradeError::NotFound { .. } => "not_found",
            GradeError::StoreNotFound { .. } => "store_not_found",
            GradeError::StoreUnavailable { .. } => "store_unavailable",
            GradeError::Io(_) => "io_error",
            GradeError::Json(_) => "json_error",
            GradeError::Toml(_) => "toml_error",
            GradeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradeError>;
