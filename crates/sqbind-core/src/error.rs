//! Errors surfaced by the binding state.
//!
//! Recording an error in the registry is never itself an error. These types
//! cover the places where calling code asks for a `Result`: strict-mode
//! recording, draining a pending script error, and using the default VM
//! before one was set.

use thiserror::Error;

/// Result alias for binding operations.
pub type BindResult<T> = Result<T, BindError>;

/// Errors returned by the binding state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A new error was rejected because one is already pending for the VM.
    #[error("error already pending ('{existing}'), rejected '{rejected}'")]
    ErrorPending { existing: String, rejected: String },

    /// A pending error was drained from the registry.
    #[error("{message}")]
    Script { message: String },

    /// The default VM was used before being set.
    #[error("no default VM has been set")]
    NoDefaultVm,
}

impl BindError {
    /// The script error text, if this is a drained script error.
    pub fn script_message(&self) -> Option<&str> {
        match self {
            BindError::Script { message } => Some(message),
            _ => None,
        }
    }
}
