//! Lobus Choices: a sequential interactive decision engine.
//!
//! A run walks an ordered list of [`Scenario`]s. Each scenario is either
//! skipped (its prerequisite is not met given the decisions so far) or
//! presented to the participant, who picks one of the applicable
//! [`Choice`]s by number. The chosen choice's effect runs against the
//! caller's context and the outcome lands in the [`DecisionLedger`].
//!
//! ```ignore
//! let class = Choices::create_scenario(
//!     "class",
//!     ScenarioConfig::new("Choose your class")
//!         .choice(Choice::new("warrior", "Warrior"))
//!         .choice(Choice::new("mage", "Mage")),
//! );
//! let decided = Choices::new(
//!     ChoicesConfig::new(sheet).scenario(class).channel(rx).present(say),
//! )?
//! .decide_all()
//! .await?;
//! ```

pub mod choice;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod scenario;

pub use choice::{Choice, Effect, EffectError};
pub use engine::{
    Choices, ChoicesConfig, Decided, FALLBACK_MESSAGE, INVALID_SELECTION, RunOutcome,
    parse_selection,
};
pub use error::{ConfigurationError, DecisionError};
pub use ledger::{ChoiceId, DecisionLedger, Outcome};
pub use scenario::{Scenario, ScenarioConfig};
