//! Event dispatch.
//!
//! `Machine` owns the current state and the context and applies the
//! transitions handlers return. `SharedMachine` wraps it in a mutex for
//! callers that dispatch from several threads, and reports a panic
//! mid-dispatch as `MachineError::Poisoned` on every later call.

mod engine;
mod error;
mod shared;

pub use engine::{Machine, Outcome};
pub use error::MachineError;
pub use shared::SharedMachine;
