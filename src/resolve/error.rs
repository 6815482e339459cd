//! Resolver-boundary error types.

use thiserror::Error;

/// Failure reported by the data-access collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("query execution failed: {message}")]
pub struct ExecuteError {
    /// Driver-reported failure description.
    pub message: String,
}

impl ExecuteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors recovered at the resolver boundary.
///
/// These are field-level: the specific resolution reports the error rather
/// than aborting the whole response. Not-found (zero rows) is not an error,
/// it is a valid [`crate::resolve::Resolved::Row`] of `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The underlying query execution failed.
    #[error(transparent)]
    Execution(#[from] ExecuteError),

    /// A `Parent` binding named a column absent from the parent row.
    #[error("field '{field}': parent row has no column '{column}'")]
    MissingParentColumn { field: String, column: String },
}
