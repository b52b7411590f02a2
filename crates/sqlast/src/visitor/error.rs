//! Traversal error types.

use thiserror::Error;

/// Errors that abort a traversal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The walker met a node kind with no child order.
    ///
    /// The node model and the walker's dispatch table are out of sync. This is
    /// an integration defect, never a property of the SQL being walked.
    #[error("Traversal contract violation: node kind `{kind}` has no registered child order")]
    UnregisteredKind {
        /// Name of the offending kind.
        kind: String,
    },
}

impl WalkError {
    /// Creates a new unregistered kind error.
    pub fn unregistered(kind: impl Into<String>) -> Self {
        Self::UnregisteredKind { kind: kind.into() }
    }

    /// Returns the name of the kind that caused the error.
    pub fn kind(&self) -> &str {
        match self {
            Self::UnregisteredKind { kind } => kind,
        }
    }
}
