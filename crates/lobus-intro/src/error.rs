//! Error types for the intro flows.

use lobus_choices::DecisionError;
use lobus_core::error::DomainError;
use thiserror::Error;

/// Errors that end an intro flow early.
#[derive(Debug, Error)]
pub enum IntroError {
    /// The participant's channel closed mid-flow.
    #[error("participant disconnected")]
    Disconnected,

    /// The account may not hold another living character.
    #[error("account {account} already has the maximum of {max} characters")]
    CharacterLimit {
        /// The account username.
        account: String,
        /// The configured limit.
        max: usize,
    },

    /// The origin questionnaire was rejected by the choices engine.
    #[error("character origin could not be configured")]
    Misconfigured,

    /// A decision run failed.
    #[error(transparent)]
    Decision(#[from] DecisionError),

    /// A persistence collaborator failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
