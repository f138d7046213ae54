//! A single selectable option within a scenario.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::ledger::{ChoiceId, DecisionLedger};
use crate::scenario::Scenario;

/// Error type returned by choice effects. The engine does not interpret it;
/// it is handed back to the caller of the run.
pub type EffectError = Box<dyn std::error::Error + Send + Sync>;

/// Applicability test evaluated against the decisions so far and the
/// caller's context. Must not rely on mutating either.
pub(crate) type Prerequisite<C> = dyn Fn(&DecisionLedger, &C) -> bool + Send + Sync;

/// Work performed when a choice is selected.
///
/// Implement this directly for effects that need to await something (a
/// repository write, say). Plain closures go through
/// [`Choice::on_select`] instead.
#[async_trait]
pub trait Effect<C>: Send + Sync {
    /// Applies the effect for `scenario` to `context`.
    async fn apply(&self, scenario: &Scenario<C>, context: &mut C) -> Result<(), EffectError>;
}

struct SyncEffect<F>(F);

#[async_trait]
impl<C, F> Effect<C> for SyncEffect<F>
where
    C: Send + 'static,
    F: Fn(&Scenario<C>, &mut C) -> Result<(), EffectError> + Send + Sync,
{
    async fn apply(&self, scenario: &Scenario<C>, context: &mut C) -> Result<(), EffectError> {
        (self.0)(scenario, context)
    }
}

/// One option of a [`Scenario`].
///
/// A choice with no prerequisite is always offered; one with no effect only
/// records its id when picked.
pub struct Choice<C> {
    id: ChoiceId,
    description: String,
    prerequisite: Option<Arc<Prerequisite<C>>>,
    effect: Option<Arc<dyn Effect<C>>>,
}

impl<C: Send + 'static> Choice<C> {
    /// Creates a choice shown to the participant as `description`.
    #[must_use]
    pub fn new(id: impl Into<ChoiceId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            prerequisite: None,
            effect: None,
        }
    }

    /// Offers this choice only when `prerequisite` holds.
    #[must_use]
    pub fn when<P>(mut self, prerequisite: P) -> Self
    where
        P: Fn(&DecisionLedger, &C) -> bool + Send + Sync + 'static,
    {
        self.prerequisite = Some(Arc::new(prerequisite));
        self
    }

    /// Runs `effect` when this choice is selected.
    #[must_use]
    pub fn on_select<F>(mut self, effect: F) -> Self
    where
        F: Fn(&Scenario<C>, &mut C) -> Result<(), EffectError> + Send + Sync + 'static,
    {
        self.effect = Some(Arc::new(SyncEffect(effect)));
        self
    }

    /// Runs an asynchronous `effect` when this choice is selected.
    #[must_use]
    pub fn on_select_async<E>(mut self, effect: E) -> Self
    where
        E: Effect<C> + 'static,
    {
        self.effect = Some(Arc::new(effect));
        self
    }

    /// Returns the choice identifier.
    #[must_use]
    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    /// Returns the text shown to the participant.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluates the prerequisite.
    #[must_use]
    pub fn is_available(&self, decisions: &DecisionLedger, context: &C) -> bool {
        self.prerequisite
            .as_ref()
            .is_none_or(|prerequisite| prerequisite(decisions, context))
    }

    pub(crate) async fn select(
        &self,
        scenario: &Scenario<C>,
        context: &mut C,
    ) -> Result<(), EffectError> {
        match &self.effect {
            Some(effect) => effect.apply(scenario, context).await,
            None => Ok(()),
        }
    }
}

impl<C> Clone for Choice<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            prerequisite: self.prerequisite.clone(),
            effect: self.effect.clone(),
        }
    }
}

impl<C> fmt::Debug for Choice<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("conditional", &self.prerequisite.is_some())
            .finish_non_exhaustive()
    }
}
