//! Transition values returned by event handlers.

use std::fmt;

/// One-shot action run against the context while a transition is applied.
pub type Effect<C> = Box<dyn FnOnce(&mut C) + Send>;

/// The next state plus an optional effect.
///
/// A transition carries no validation of its own: once a handler returns
/// one, the machine applies it. Handlers that want to refuse an event
/// return `None` instead.
pub struct Transition<S, C> {
    target: S,
    effect: Option<Effect<C>>,
}

impl<S, C> Transition<S, C> {
    /// Create a transition to `target` with no effect.
    pub fn new(target: S) -> Self {
        Self {
            target,
            effect: None,
        }
    }

    /// Attach an effect, run after the old state's exit hook and before
    /// the new state's entry hook.
    pub fn with_effect<F>(mut self, effect: F) -> Self
    where
        F: FnOnce(&mut C) + Send + 'static,
    {
        self.effect = Some(Box::new(effect));
        self
    }

    /// The state the machine will move to.
    pub fn target(&self) -> &S {
        &self.target
    }

    /// Whether an effect will run when this transition is applied.
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Split into target state and effect. Consumes the transition so the
    /// effect can run at most once.
    pub fn into_parts(self) -> (S, Option<Effect<C>>) {
        (self.target, self.effect)
    }
}

impl<S: fmt::Debug, C> fmt::Debug for Transition<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("has_effect", &self.effect.is_some())
            .finish()
    }
}
