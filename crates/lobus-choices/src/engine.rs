//! The decision engine.
//!
//! [`Choices`] folds over its scenarios strictly left to right. For each one
//! it runs a small state machine:
//!
//! ```text
//! Evaluate -> Skip                                   (prerequisite unmet)
//! Evaluate -> Present -> AwaitInput -> Validate -> Apply -> Recorded
//!                ^                        |
//!                +------- invalid --------+
//! ```
//!
//! The retry edge is a loop, never recursion, and only one read is ever
//! outstanding on the channel.

use std::collections::HashSet;

use lobus_core::channel::LineChannel;
use lobus_core::present::Presenter;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::choice::Choice;
use crate::error::{ConfigurationError, DecisionError};
use crate::ledger::{DecisionLedger, Outcome};
use crate::scenario::{Scenario, ScenarioConfig};

/// Message handed back by [`Choices::run`] when the engine could not be
/// configured.
pub const FALLBACK_MESSAGE: &str = "Failed, please contact an Admin.";

/// Notice shown after a reply that does not name an offered choice.
pub const INVALID_SELECTION: &str = "Invalid selection...";

const PROMPT: &str = "|\r\n`-> ";

/// Inputs for one engine run.
pub struct ChoicesConfig<'a, C> {
    scenarios: Vec<Scenario<C>>,
    channel: Option<Box<dyn LineChannel + 'a>>,
    present: Option<Box<dyn Presenter + 'a>>,
    context: C,
}

impl<'a, C: Send + 'static> ChoicesConfig<'a, C> {
    /// Starts a configuration around the caller's context. The context is
    /// handed to every prerequisite and effect and returned in [`Decided`].
    #[must_use]
    pub fn new(context: C) -> Self {
        Self {
            scenarios: Vec::new(),
            channel: None,
            present: None,
            context,
        }
    }

    /// Appends a scenario.
    #[must_use]
    pub fn scenario(mut self, scenario: Scenario<C>) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Appends scenarios, keeping their order.
    #[must_use]
    pub fn scenarios(mut self, scenarios: impl IntoIterator<Item = Scenario<C>>) -> Self {
        self.scenarios.extend(scenarios);
        self
    }

    /// Sets the channel replies are read from.
    #[must_use]
    pub fn channel(mut self, channel: impl LineChannel + 'a) -> Self {
        self.channel = Some(Box::new(channel));
        self
    }

    /// Sets the presenter scenario text is written to.
    #[must_use]
    pub fn present(mut self, present: impl Presenter + 'a) -> Self {
        self.present = Some(Box::new(present));
        self
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Decided<C> {
    /// One outcome per scenario, in scenario order.
    pub decisions: DecisionLedger,
    /// The context after every selected effect has been applied.
    pub context: C,
}

/// Result of [`Choices::run`].
#[derive(Debug)]
pub enum RunOutcome<C> {
    /// Every scenario was decided.
    Completed(Decided<C>),
    /// The configuration was rejected; carries [`FALLBACK_MESSAGE`].
    Misconfigured(&'static str),
}

/// Walks a list of scenarios with one participant.
///
/// An engine is built per run and consumed by [`Choices::decide_all`].
pub struct Choices<'a, C> {
    run_id: Uuid,
    scenarios: Vec<Scenario<C>>,
    channel: Box<dyn LineChannel + 'a>,
    present: Box<dyn Presenter + 'a>,
    context: C,
    decisions: DecisionLedger,
}

impl<'a, C: Send + 'static> Choices<'a, C> {
    /// Validates `config` and builds an engine with an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if there are no scenarios, the
    /// channel or presenter is missing, two scenarios share a name, or a
    /// scenario has no choices at all.
    pub fn new(config: ChoicesConfig<'a, C>) -> Result<Self, ConfigurationError> {
        let ChoicesConfig {
            scenarios,
            channel,
            present,
            context,
        } = config;

        if scenarios.is_empty() {
            return Err(ConfigurationError::NoScenarios);
        }
        let channel = channel.ok_or(ConfigurationError::MissingChannel)?;
        let present = present.ok_or(ConfigurationError::MissingPresenter)?;

        let mut names = HashSet::new();
        for scenario in &scenarios {
            if !names.insert(scenario.name()) {
                return Err(ConfigurationError::DuplicateScenario(
                    scenario.name().to_owned(),
                ));
            }
            if scenario.choices().is_empty() {
                return Err(ConfigurationError::NoChoices(scenario.name().to_owned()));
            }
        }

        Ok(Self {
            run_id: Uuid::new_v4(),
            scenarios,
            channel,
            present,
            context,
            decisions: DecisionLedger::new(),
        })
    }

    /// Scenario factory.
    #[must_use]
    pub fn create_scenario(name: impl Into<String>, config: ScenarioConfig<C>) -> Scenario<C> {
        Scenario::new(name, config)
    }

    /// Builds an engine from `config` and runs it to completion.
    ///
    /// A rejected configuration is logged and reported as
    /// [`RunOutcome::Misconfigured`] carrying [`FALLBACK_MESSAGE`] instead of
    /// an error, so it can be shown to the participant as is.
    ///
    /// # Errors
    ///
    /// Propagates any [`DecisionError`] raised while deciding.
    pub async fn run(config: ChoicesConfig<'a, C>) -> Result<RunOutcome<C>, DecisionError> {
        let choices = match Self::new(config) {
            Ok(choices) => choices,
            Err(e) => {
                error!(error = %e, "rejected choices configuration");
                return Ok(RunOutcome::Misconfigured(FALLBACK_MESSAGE));
            }
        };
        choices.decide_all().await.map(RunOutcome::Completed)
    }

    /// Returns the decisions recorded so far.
    #[must_use]
    pub fn decisions(&self) -> &DecisionLedger {
        &self.decisions
    }

    /// Decides every scenario in order, each one completely (retries
    /// included) before the next is evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecisionError`] raised; later scenarios are not
    /// visited.
    #[instrument(skip(self), fields(run_id = %self.run_id, scenarios = self.scenarios.len()))]
    pub async fn decide_all(mut self) -> Result<Decided<C>, DecisionError> {
        let scenarios = std::mem::take(&mut self.scenarios);
        for scenario in &scenarios {
            self.decide(scenario).await?;
        }

        info!(decisions = self.decisions.len(), "all scenarios decided");

        Ok(Decided {
            decisions: self.decisions,
            context: self.context,
        })
    }

    /// Decides a single scenario and records its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::AlreadyDecided`] if `scenario` already has an
    /// outcome in this run, [`DecisionError::ChannelClosed`] if the participant goes away,
    /// [`DecisionError::NoAvailableChoices`] if every choice is filtered out,
    /// and [`DecisionError::Effect`] if the selected effect fails. Invalid
    /// replies are not errors; they are rejected and asked again.
    #[instrument(skip_all, fields(scenario = %scenario.name()))]
    pub async fn decide(&mut self, scenario: &Scenario<C>) -> Result<(), DecisionError> {
        if self.decisions.get(scenario.name()).is_some() {
            warn!("scenario already decided in this run");
            return Err(DecisionError::AlreadyDecided {
                scenario: scenario.name().to_owned(),
            });
        }

        if !scenario.is_applicable(&self.decisions, &self.context) {
            debug!("prerequisite not met, skipping");
            self.decisions.record(scenario.name(), Outcome::Skipped);
            return Ok(());
        }

        loop {
            let available = scenario.available_choices(&self.decisions, &self.context);
            if available.is_empty() {
                warn!("every choice was filtered out");
                return Err(DecisionError::NoAvailableChoices {
                    scenario: scenario.name().to_owned(),
                });
            }

            self.render(scenario, &available);

            let Some(reply) = self.channel.next_line().await else {
                warn!("channel closed while awaiting a selection");
                return Err(DecisionError::ChannelClosed {
                    scenario: scenario.name().to_owned(),
                });
            };

            let Some(index) = parse_selection(&reply, available.len()) else {
                debug!(reply = %reply, "rejected selection");
                self.present.say(INVALID_SELECTION);
                continue;
            };

            let choice = available[index];
            choice
                .select(scenario, &mut self.context)
                .await
                .map_err(|source| DecisionError::Effect {
                    scenario: scenario.name().to_owned(),
                    choice: choice.id().clone(),
                    source,
                })?;

            info!(choice = %choice.id(), "selection recorded");
            self.decisions
                .record(scenario.name(), Outcome::Chosen(choice.id().clone()));
            return Ok(());
        }
    }

    fn render(&mut self, scenario: &Scenario<C>, available: &[&Choice<C>]) {
        self.present.say("");
        self.present.say(scenario.title());
        if let Some(description) = scenario.description() {
            self.present.say(description);
        }
        self.present.say("");

        for (position, choice) in available.iter().enumerate() {
            self.present
                .say(&format!("| [{}] {}", position + 1, choice.description()));
        }

        self.present.write(PROMPT);
    }
}

/// Maps a 1-based reply onto an index into `available_len` choices.
///
/// Only the leading number counts: after trimming, an optional sign and the
/// run of ASCII digits that follows are read and the rest is ignored, so
/// `"2abc"` picks the second choice and `"1.5"` the first. A reply that does
/// not start with a number, or names no offered position, yields `None`.
#[must_use]
pub fn parse_selection(reply: &str, available_len: usize) -> Option<usize> {
    let reply = reply.trim();
    let (negative, unsigned) = match reply.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, reply.strip_prefix('+').unwrap_or(reply)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() || negative {
        return None;
    }

    digits
        .parse::<usize>()
        .ok()
        .filter(|position| (1..=available_len).contains(position))
        .map(|position| position - 1)
}
