//! Tripwire: an event-driven state machine engine
//!
//! A machine owns exactly one current state and a context. Events are
//! handled by the current state, which either declines (nothing happens)
//! or returns a [`Transition`]. Applying a transition runs the old
//! state's `exit` hook, the transition's one-shot effect, swaps in the new
//! state, then runs its `enter` hook.
//!
//! # Core Concepts
//!
//! - **State**: lifecycle contract via the [`State`] trait
//! - **Transition**: target state plus optional effect
//! - **Machine**: owns state and context, applies transitions
//! - **SharedMachine**: the same machine behind a mutex
//!
//! The [`alarm`] module instantiates the engine as a security alarm.
//!
//! # Example
//!
//! ```rust
//! use tripwire::{Machine, State, Transition};
//!
//! #[derive(Debug, PartialEq)]
//! enum Turnstile {
//!     Locked,
//!     Unlocked,
//! }
//!
//! impl State<u32> for Turnstile {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Locked => "Locked",
//!             Self::Unlocked => "Unlocked",
//!         }
//!     }
//! }
//!
//! let mut machine = Machine::new(Turnstile::Locked, 0u32);
//!
//! let outcome = machine.dispatch("coin", |state, _| match state {
//!     Turnstile::Locked => Some(
//!         Transition::new(Turnstile::Unlocked).with_effect(|coins: &mut u32| *coins += 1),
//!     ),
//!     Turnstile::Unlocked => None,
//! });
//!
//! assert!(outcome.is_transition());
//! assert_eq!(machine.state(), &Turnstile::Unlocked);
//! assert_eq!(*machine.context(), 1);
//! ```

pub mod alarm;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use core::{Effect, State, Transition};
pub use machine::{Machine, MachineError, Outcome, SharedMachine};
