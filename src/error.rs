//! Error types for emissions-drilldown.
//!
//! Both variants are deterministic: the same invalid input always fails the
//! same way, so neither is worth retrying. The aggregator surfaces them to
//! the caller unchanged; user-facing reporting is the caller's job.

use thiserror::Error;

/// Errors produced while aggregating a scope dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrilldownError {
    /// Shape or type violation in the source data.
    #[error("Malformed input at {path}: {message}")]
    MalformedInput { path: String, message: String },

    /// A computed panel identifier aliases one already in the detail index.
    #[error("Identifier collision: panel id {id:?} is already in use")]
    IdentifierCollision { id: String },
}

impl DrilldownError {
    /// Create a malformed-input error for the node at `path`.
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an identifier-collision error for `id`.
    pub fn collision(id: impl Into<String>) -> Self {
        Self::IdentifierCollision { id: id.into() }
    }
}

/// Result type alias for aggregation operations.
pub type Result<T> = std::result::Result<T, DrilldownError>;
