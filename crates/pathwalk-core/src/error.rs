//! Error types and exit codes for pathwalk
//!
//! The traversal engine itself has no failure paths. Errors come from
//! loading graph files, validating their contents, the checked iterator
//! constructor, and the CLI.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid graph file)

mod macros;

use thiserror::Error;

/// Exit codes for the pathwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the traversal engine
#[derive(Error, Debug)]
pub enum PathwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("traversal interrupted after {settled} settled vertices")]
    Interrupted { settled: usize },
}

impl PathwalkError {
    /// Create an error for a vertex id that does not resolve
    pub fn vertex_not_found(id: impl std::fmt::Display) -> Self {
        PathwalkError::VertexNotFound { id: id.to_string() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathwalkError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PathwalkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathwalkError::UnknownFormat(_)
            | PathwalkError::UsageError(_)
            | PathwalkError::Unsupported { .. } => ExitCode::Usage,

            PathwalkError::VertexNotFound { .. } | PathwalkError::InvalidValue { .. } => {
                ExitCode::Data
            }

            PathwalkError::Yaml(_)
            | PathwalkError::Json(_)
            | PathwalkError::Toml(_)
            | PathwalkError::FailedOperationWithTarget { .. }
            | PathwalkError::Other(_)
            | PathwalkError::Interrupted { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathwalkError::UnknownFormat(_) => "unknown_format",
            PathwalkError::UsageError(_) => "usage_error",
            PathwalkError::Unsupported { .. } => "unsupported",
            PathwalkError::VertexNotFound { .. } => "vertex_not_found",
            PathwalkError::InvalidValue { .. } => "invalid_value",
            PathwalkError::Yaml(_) => "yaml_error",
            PathwalkError::Json(_) => "json_error",
            PathwalkError::Toml(_) => "toml_error",
            PathwalkError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathwalkError::Other(_) => "other",
            PathwalkError::Interrupted { .. } => "interrupted",
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

/// Result type alias for pathwalk operations
pub type Result<T> = std::result::Result<T, PathwalkError>;
