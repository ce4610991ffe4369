//! Thread-safe handle around a [`Machine`].

use super::engine::{Machine, Outcome};
use super::error::MachineError;
use crate::core::{State, Transition};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use uuid::Uuid;

struct Slot<S, C> {
    machine: Machine<S, C>,
    poisoned: bool,
}

/// Cloneable handle to a machine guarded by a single mutex.
///
/// The lock is held for the full handler, exit, effect, swap and enter
/// sequence, so no other handle can observe a state that has been exited
/// but whose successor has not been entered yet. Hooks and effects must
/// not dispatch through the same handle: the mutex is not reentrant.
///
/// If anything panics during dispatch the panic is passed on to the
/// caller and the machine is marked poisoned. From then on every handle
/// returns [`MachineError::Poisoned`].
pub struct SharedMachine<S, C> {
    id: Uuid,
    inner: Arc<Mutex<Slot<S, C>>>,
}

impl<S: State<C>, C> SharedMachine<S, C> {
    /// Move `machine` behind a lock.
    pub fn new(machine: Machine<S, C>) -> Self {
        Self {
            id: machine.id(),
            inner: Arc::new(Mutex::new(Slot {
                machine,
                poisoned: false,
            })),
        }
    }

    /// Id of the wrapped machine.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Dispatch one event while holding the lock.
    pub fn dispatch<F>(&self, event: &str, handler: F) -> Result<Outcome, MachineError>
    where
        F: FnOnce(&mut S, &mut C) -> Option<Transition<S, C>>,
    {
        let mut slot = self.inner.lock();
        if slot.poisoned {
            return Err(MachineError::Poisoned { machine: self.id });
        }

        let machine = &mut slot.machine;
        match panic::catch_unwind(AssertUnwindSafe(|| machine.dispatch(event, handler))) {
            Ok(outcome) => Ok(outcome),
            Err(payload) => {
                slot.poisoned = true;
                drop(slot);
                tracing::error!(machine = %self.id, event, "dispatch panicked, machine poisoned");
                panic::resume_unwind(payload)
            }
        }
    }

    /// Read the machine under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Machine<S, C>) -> R) -> Result<R, MachineError> {
        let slot = self.inner.lock();
        if slot.poisoned {
            return Err(MachineError::Poisoned { machine: self.id });
        }
        Ok(f(&slot.machine))
    }

    /// Whether a panic during dispatch has disabled this machine.
    pub fn is_poisoned(&self) -> bool {
        self.inner.lock().poisoned
    }
}

impl<S, C> Clone for SharedMachine<S, C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}
