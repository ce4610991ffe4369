//! Single-threaded machine that owns the current state and its context.

use crate::core::{State, Transition};
use uuid::Uuid;

/// Result of dispatching one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The handler returned no transition; nothing changed.
    Ignored,

    /// The handler's transition was applied.
    Transitioned { from: String, to: String },
}

impl Outcome {
    /// Whether the event moved the machine to a new state.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Event-driven state machine.
///
/// Owns exactly one current state and the context handed to handlers,
/// hooks and effects. The initial state is considered already entered:
/// construction does not call its `enter` hook.
#[derive(Debug)]
pub struct Machine<S, C> {
    id: Uuid,
    state: S,
    context: C,
}

impl<S: State<C>, C> Machine<S, C> {
    /// Create a machine in `initial` with the given context.
    pub fn new(initial: S, context: C) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: initial,
            context,
        }
    }

    /// Instance id, used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the context. Only dispatch can change it.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Take the machine apart into its state and context.
    pub fn into_parts(self) -> (S, C) {
        (self.state, self.context)
    }

    /// Dispatch one event.
    ///
    /// `handler` receives the current state mutably, so per-activation data
    /// it updates survives even when it declines to transition. When it
    /// returns a transition the machine runs, in order: the old state's
    /// `exit`, the effect, the state swap, the new state's `enter`.
    pub fn dispatch<F>(&mut self, event: &str, handler: F) -> Outcome
    where
        F: FnOnce(&mut S, &mut C) -> Option<Transition<S, C>>,
    {
        let Some(transition) = handler(&mut self.state, &mut self.context) else {
            tracing::debug!(
                machine = %self.id,
                event,
                state = self.state.name(),
                "event ignored"
            );
            return Outcome::Ignored;
        };

        let from = self.state.name().to_string();
        let (target, effect) = transition.into_parts();

        self.state.exit(&mut self.context);
        if let Some(effect) = effect {
            effect(&mut self.context);
        }
        self.state = target;
        self.state.enter(&mut self.context);

        let to = self.state.name().to_string();
        tracing::info!(machine = %self.id, event, %from, %to, "transition applied");

        Outcome::Transitioned { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Context that records every hook and effect call in order.
    #[derive(Debug, Default)]
    struct Trace {
        calls: Vec<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Light {
        Off,
        On { presses: u32 },
    }

    impl State<Trace> for Light {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On { .. } => "On",
            }
        }

        fn enter(&self, trace: &mut Trace) {
            trace.calls.push(format!("enter {}", self.name()));
        }

        fn exit(&self, trace: &mut Trace) {
            trace.calls.push(format!("exit {}", self.name()));
        }
    }

    fn toggle(state: &mut Light, _: &mut Trace) -> Option<Transition<Light, Trace>> {
        match state {
            Light::Off => Some(
                Transition::new(Light::On { presses: 0 })
                    .with_effect(|trace: &mut Trace| trace.calls.push("effect".to_string())),
            ),
            Light::On { .. } => Some(Transition::new(Light::Off)),
        }
    }

    // Only turns the light off on the third press.
    fn press(state: &mut Light, _: &mut Trace) -> Option<Transition<Light, Trace>> {
        match state {
            Light::On { presses } => {
                *presses += 1;
                (*presses >= 3).then(|| Transition::new(Light::Off))
            }
            Light::Off => None,
        }
    }

    #[test]
    fn transition_runs_exit_effect_enter_in_order() {
        let mut machine = Machine::new(Light::Off, Trace::default());

        let outcome = machine.dispatch("toggle", toggle);

        assert_eq!(
            outcome,
            Outcome::Transitioned {
                from: "Off".to_string(),
                to: "On".to_string(),
            }
        );
        assert_eq!(
            machine.context().calls,
            vec!["exit Off", "effect", "enter On"]
        );
        assert_eq!(machine.state(), &Light::On { presses: 0 });
    }

    #[test]
    fn ignored_event_produces_no_hooks() {
        let mut machine = Machine::new(Light::Off, Trace::default());

        let outcome = machine.dispatch("press", press);

        assert_eq!(outcome, Outcome::Ignored);
        assert!(!outcome.is_transition());
        assert!(machine.context().calls.is_empty());
        assert_eq!(machine.state(), &Light::Off);
    }

    #[test]
    fn construction_does_not_enter_initial_state() {
        let machine = Machine::new(Light::Off, Trace::default());
        assert!(machine.context().calls.is_empty());
    }

    #[test]
    fn declining_handler_keeps_its_mutation() {
        let mut machine = Machine::new(Light::On { presses: 0 }, Trace::default());

        assert_eq!(machine.dispatch("press", press), Outcome::Ignored);
        assert_eq!(machine.dispatch("press", press), Outcome::Ignored);
        assert_eq!(machine.state(), &Light::On { presses: 2 });

        assert!(machine.dispatch("press", press).is_transition());
        assert_eq!(machine.state(), &Light::Off);
    }

    #[test]
    fn reentering_a_state_starts_fresh() {
        let mut machine = Machine::new(Light::On { presses: 0 }, Trace::default());

        machine.dispatch("press", press);
        machine.dispatch("toggle", toggle);
        machine.dispatch("toggle", toggle);

        assert_eq!(machine.state(), &Light::On { presses: 0 });
    }

    #[test]
    fn each_activation_enters_and_exits_once() {
        let mut machine = Machine::new(Light::Off, Trace::default());

        for _ in 0..4 {
            machine.dispatch("toggle", toggle);
        }

        let calls = &machine.context().calls;
        let enters = calls.iter().filter(|c| c.starts_with("enter")).count();
        let exits = calls.iter().filter(|c| c.starts_with("exit")).count();
        assert_eq!(enters, 4);
        assert_eq!(exits, 4);
        assert_eq!(calls[0], "exit Off");
        assert_eq!(calls.last().map(String::as_str), Some("enter Off"));
    }

    #[test]
    fn machines_get_distinct_ids() {
        let a = Machine::new(Light::Off, Trace::default());
        let b = Machine::new(Light::Off, Trace::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn into_parts_returns_state_and_context() {
        let mut machine = Machine::new(Light::Off, Trace::default());
        machine.dispatch("toggle", toggle);

        let (state, trace) = machine.into_parts();
        assert_eq!(state, Light::On { presses: 0 });
        assert_eq!(trace.calls, vec!["exit Off", "effect", "enter On"]);
    }
}
