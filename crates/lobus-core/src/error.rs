//! Domain error types.

use thiserror::Error;

/// Errors raised by the persistence collaborators (player and account
/// storage) that the input-event flows call into.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A player or account was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
