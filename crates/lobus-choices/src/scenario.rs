//! Scenarios: one decision point with its ordered choices.

use std::fmt;
use std::sync::Arc;

use crate::choice::{Choice, Prerequisite};
use crate::ledger::DecisionLedger;

/// Everything about a scenario except its name, as accepted by
/// [`Scenario::new`] and [`crate::Choices::create_scenario`].
pub struct ScenarioConfig<C> {
    title: String,
    description: Option<String>,
    prerequisite: Option<Arc<Prerequisite<C>>>,
    choices: Vec<Choice<C>>,
}

impl<C: Send + 'static> ScenarioConfig<C> {
    /// Starts a configuration with the heading shown above the choices.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            prerequisite: None,
            choices: Vec::new(),
        }
    }

    /// Adds a line of text shown under the title.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Presents the scenario only when `prerequisite` holds; otherwise it is
    /// recorded as skipped.
    #[must_use]
    pub fn when<P>(mut self, prerequisite: P) -> Self
    where
        P: Fn(&DecisionLedger, &C) -> bool + Send + Sync + 'static,
    {
        self.prerequisite = Some(Arc::new(prerequisite));
        self
    }

    /// Appends a choice.
    #[must_use]
    pub fn choice(mut self, choice: Choice<C>) -> Self {
        self.choices.push(choice);
        self
    }

    /// Appends several choices, keeping their order.
    #[must_use]
    pub fn choices(mut self, choices: impl IntoIterator<Item = Choice<C>>) -> Self {
        self.choices.extend(choices);
        self
    }
}

/// A named decision point.
pub struct Scenario<C> {
    name: String,
    title: String,
    description: Option<String>,
    prerequisite: Option<Arc<Prerequisite<C>>>,
    choices: Vec<Choice<C>>,
}

impl<C: Send + 'static> Scenario<C> {
    /// Builds a scenario. No validation happens here; the engine checks for
    /// empty choice lists and duplicate names when it is constructed.
    #[must_use]
    pub fn new(name: impl Into<String>, config: ScenarioConfig<C>) -> Self {
        Self {
            name: name.into(),
            title: config.title,
            description: config.description,
            prerequisite: config.prerequisite,
            choices: config.choices,
        }
    }

    /// Returns the ledger key for this scenario.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns every choice, including ones that may be filtered out.
    #[must_use]
    pub fn choices(&self) -> &[Choice<C>] {
        &self.choices
    }

    /// Evaluates the scenario prerequisite. Scenarios without one always
    /// apply.
    #[must_use]
    pub fn is_applicable(&self, decisions: &DecisionLedger, context: &C) -> bool {
        self.prerequisite
            .as_ref()
            .is_none_or(|prerequisite| prerequisite(decisions, context))
    }

    /// Returns the choices whose prerequisites hold, in definition order.
    #[must_use]
    pub fn available_choices(&self, decisions: &DecisionLedger, context: &C) -> Vec<&Choice<C>> {
        self.choices
            .iter()
            .filter(|choice| choice.is_available(decisions, context))
            .collect()
    }
}

impl<C> Clone for Scenario<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            prerequisite: self.prerequisite.clone(),
            choices: self.choices.clone(),
        }
    }
}

impl<C> fmt::Debug for Scenario<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("conditional", &self.prerequisite.is_some())
            .field("choices", &self.choices)
            .finish()
    }
}
