//! Lifecycle contract shared by every state a machine can hold.
//!
//! A state is a value that knows its own name and may react to being
//! activated or deactivated. Event handling is not part of this trait:
//! each domain declares its own handler trait and the machine only sees
//! the handler's result.

/// Trait for machine states, generic over the context `C` the machine owns.
///
/// `enter` and `exit` receive the context mutably so that hooks can emit
/// notifications or update domain data. Both default to doing nothing.
///
/// # Example
///
/// ```rust
/// use tripwire::core::State;
///
/// #[derive(Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State<Vec<String>> for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn enter(&self, log: &mut Vec<String>) {
///         log.push(format!("entered {}", self.name()));
///     }
/// }
///
/// let mut log = Vec::new();
/// Door::Open.enter(&mut log);
/// Door::Closed.exit(&mut log);
/// assert_eq!(log, vec!["entered Open".to_string()]);
/// ```
pub trait State<C> {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Called once when this state becomes current.
    ///
    /// Default implementation does nothing.
    fn enter(&self, _context: &mut C) {}

    /// Called once when this state stops being current, before the
    /// transition's effect runs.
    ///
    /// Default implementation does nothing.
    fn exit(&self, _context: &mut C) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestState {
        Quiet,
        Loud,
    }

    impl State<Vec<&'static str>> for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Quiet => "Quiet",
                Self::Loud => "Loud",
            }
        }

        fn enter(&self, log: &mut Vec<&'static str>) {
            if let Self::Loud = self {
                log.push("enter Loud");
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Quiet.name(), "Quiet");
        assert_eq!(TestState::Loud.name(), "Loud");
    }

    #[test]
    fn default_hooks_do_nothing() {
        let mut log = Vec::new();
        TestState::Quiet.enter(&mut log);
        TestState::Quiet.exit(&mut log);
        TestState::Loud.exit(&mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn overridden_hook_touches_context() {
        let mut log = Vec::new();
        TestState::Loud.enter(&mut log);
        assert_eq!(log, vec!["enter Loud"]);
    }
}
