//! Errors reported by the shared machine handle.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`SharedMachine`](super::SharedMachine).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// A handler, hook or effect panicked mid-dispatch. The machine may
    /// have exited its old state without entering the new one, so every
    /// handle refuses further use.
    #[error("Machine {machine} poisoned by a panic during dispatch")]
    Poisoned { machine: Uuid },
}
