//! Core engine types.
//!
//! This module contains the domain-free vocabulary of the engine:
//! - States via the `State` trait (name plus entry/exit hooks)
//! - Transitions carrying a target state and an optional one-shot effect

mod state;
mod transition;

pub use state::State;
pub use transition::{Effect, Transition};
