//! Error types for pathweave
//!
//! Two failure classes reach callers of the search algorithms:
//! - `NotFound`: a vertex handed to a graph capability is not part of it
//! - `InvalidArgument`: malformed input rejected before any work begins
//!
//! "No path" and "no tour" are not errors; they are empty results.

mod macros;

use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during pathweave operations
#[derive(Error, Debug)]
pub enum PathError {
    /// Raised by a graph capability for an identifier it does not hold
    #[error("vertex not found: {vertex}")]
    NotFound { vertex: String },

    #[error("invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize config {path:?}: {reason}")]
    ConfigSerialize { path: PathBuf, reason: String },
}

impl PathError {
    /// Create an error for a vertex that is not part of the graph
    pub fn not_found(vertex: &impl Debug) -> Self {
        PathError::NotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    /// Create an error for a malformed argument
    pub fn invalid_argument(argument: &str, reason: impl std::fmt::Display) -> Self {
        PathError::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for the capability-level missing-vertex condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::NotFound { .. })
    }

    /// True for input rejected at an entry point
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PathError::InvalidArgument { .. })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathError::NotFound { .. } => "not_found",
            PathError::InvalidArgument { .. } => "invalid_argument",
            PathError::Io(_) => "io_error",
            PathError::Toml(_) => "toml_error",
            PathError::ConfigSerialize { .. } => "config_serialize",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            PathError::NotFound { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            PathError::InvalidArgument { argument, .. } => {
                error_obj["argument"] = serde_json::json!(argument);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for pathweave operations
pub type Result<T> = std::result::Result<T, PathError>;
