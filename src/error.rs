use thiserror::Error;

/// Failures surfaced while applying an arrangement to a host window.
///
/// The ordering and close-selection policies never fail on their own; every
/// variant here comes from talking to the host or parsing its arguments.
#[derive(Debug, Error)]
pub enum ArrangeError {
    /// The host does not know a view with this id (closed behind our back).
    #[error("view not found: {0}")]
    ViewNotFound(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("invalid command arguments: {0}")]
    InvalidArgs(#[from] serde_json::Error),
}
