//! The decision ledger: one outcome per scenario, in the order decided.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Identifier of a choice, unique within its scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChoiceId(String);

impl ChoiceId {
    /// Creates a choice identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChoiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What happened to a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The participant picked this choice.
    Chosen(ChoiceId),
    /// The scenario's prerequisite was not met; nothing was presented.
    Skipped,
}

impl Outcome {
    /// Returns the chosen id, or `None` for a skipped scenario.
    #[must_use]
    pub fn choice(&self) -> Option<&ChoiceId> {
        match self {
            Self::Chosen(id) => Some(id),
            Self::Skipped => None,
        }
    }
}

// Serialized as the chosen id string, or `false` when skipped.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Chosen(id) => serializer.serialize_str(id.as_str()),
            Self::Skipped => serializer.serialize_bool(false),
        }
    }
}

/// Accumulated outcomes of one run, keyed by scenario name.
///
/// Entries are only ever appended, each scenario at most once, and keep the
/// order in which scenarios were decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionLedger {
    entries: Vec<(String, Outcome)>,
}

impl DecisionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outcome recorded for `scenario`.
    #[must_use]
    pub fn get(&self, scenario: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(name, _)| name == scenario)
            .map(|(_, outcome)| outcome)
    }

    /// Returns the choice made for `scenario`, if it was presented and decided.
    #[must_use]
    pub fn chosen(&self, scenario: &str) -> Option<&ChoiceId> {
        self.get(scenario).and_then(Outcome::choice)
    }

    /// Returns whether `choice` was picked for `scenario`.
    #[must_use]
    pub fn is_chosen(&self, scenario: &str, choice: &str) -> bool {
        self.chosen(scenario).is_some_and(|id| id.as_str() == choice)
    }

    /// Returns whether `scenario` was skipped.
    #[must_use]
    pub fn was_skipped(&self, scenario: &str) -> bool {
        matches!(self.get(scenario), Some(Outcome::Skipped))
    }

    /// Number of scenarios recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(scenario name, outcome)` pairs in decision order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub(crate) fn record(&mut self, scenario: &str, outcome: Outcome) {
        debug_assert!(
            self.get(scenario).is_none(),
            "scenario `{scenario}` recorded twice"
        );
        self.entries.push((scenario.to_owned(), outcome));
    }
}

impl Serialize for DecisionLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, outcome) in &self.entries {
            map.serialize_entry(name, outcome)?;
        }
        map.end()
    }
}
