//! Decision engine error types.

use thiserror::Error;

use crate::choice::EffectError;
use crate::ledger::ChoiceId;

/// Raised when an engine is built from an unusable configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The scenario list was empty.
    #[error("choices must include at least one scenario")]
    NoScenarios,

    /// No line channel was supplied.
    #[error("a line channel must be supplied")]
    MissingChannel,

    /// No presenter was supplied.
    #[error("a presenter must be supplied")]
    MissingPresenter,

    /// Two scenarios share a name and would overwrite each other's outcome.
    #[error("scenario name `{0}` is used more than once")]
    DuplicateScenario(String),

    /// A scenario was defined without any choices.
    #[error("scenario `{0}` has no choices")]
    NoChoices(String),
}

/// Raised while a run is in progress. Any of these aborts the remaining
/// scenarios.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The scenario already has an outcome in this run.
    #[error("scenario `{scenario}` was already decided")]
    AlreadyDecided {
        /// Scenario that was asked again.
        scenario: String,
    },

    /// The participant went away before answering.
    #[error("channel closed while deciding scenario `{scenario}`")]
    ChannelClosed {
        /// Scenario that was waiting for input.
        scenario: String,
    },

    /// Every choice of an applicable scenario was filtered out.
    #[error("no choices are available for scenario `{scenario}`")]
    NoAvailableChoices {
        /// Scenario with nothing to present.
        scenario: String,
    },

    /// The selected choice's effect failed.
    #[error("effect for choice `{choice}` in scenario `{scenario}` failed: {source}")]
    Effect {
        /// Scenario being decided.
        scenario: String,
        /// Choice whose effect failed.
        choice: ChoiceId,
        /// Error returned by the effect.
        #[source]
        source: EffectError,
    },
}
