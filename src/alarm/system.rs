//! Alarm system facades over the generic machine.

use crate::alarm::config::{AlarmConfig, AlarmPolicy};
use crate::alarm::error::ConfigError;
use crate::alarm::notice::NotificationSink;
use crate::alarm::panel::Panel;
use crate::alarm::states::{AlarmEvents, AlarmState, AlarmTransition, Disarmed};
use crate::machine::{Machine, MachineError, Outcome, SharedMachine};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An alarm event as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "code", rename_all = "snake_case")]
pub enum AlarmEvent {
    Arm,
    Disarm(String),
    Breach,
    Panic,
    Reset(String),
}

impl AlarmEvent {
    /// Event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arm => "arm",
            Self::Disarm(_) => "disarm",
            Self::Breach => "breach",
            Self::Panic => "panic",
            Self::Reset(_) => "reset",
        }
    }

    /// Route this event to the matching handler on `state`.
    pub fn apply(&self, state: &mut AlarmState, panel: &mut Panel) -> Option<AlarmTransition> {
        match self {
            Self::Arm => state.arm(panel),
            Self::Disarm(code) => state.disarm(code, panel),
            Self::Breach => state.breach(panel),
            Self::Panic => state.panic(panel),
            Self::Reset(code) => state.reset(code, panel),
        }
    }
}

/// Single-threaded alarm system. Starts disarmed.
///
/// # Example
///
/// ```rust
/// use tripwire::alarm::{AlarmConfig, Recorder, System};
///
/// let recorder = Recorder::new();
/// let mut system = System::new(AlarmConfig::new("1234"), recorder.clone());
///
/// system.arm();
/// system.breach();
/// system.reset("1234");
///
/// assert!(system.state().is_disarmed());
/// assert_eq!(
///     recorder.messages(),
///     vec![
///         "System armed",
///         "Alarm sounded",
///         "Code accepted",
///         "Alarm stopped",
///         "System disarmed",
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct System {
    machine: Machine<AlarmState, Panel>,
}

impl System {
    /// Build a disarmed system without validating `config`.
    pub fn new(config: AlarmConfig, sink: impl NotificationSink + 'static) -> Self {
        Self {
            machine: Machine::new(Disarmed.into(), Panel::new(config, sink)),
        }
    }

    /// Validate `config` before building the system.
    pub fn from_config(
        config: AlarmConfig,
        sink: impl NotificationSink + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validated()?, sink))
    }

    /// Id of the underlying machine.
    pub fn id(&self) -> Uuid {
        self.machine.id()
    }

    /// Get current state
    pub fn state(&self) -> &AlarmState {
        self.machine.state()
    }

    /// Policy the panel was built with.
    pub fn policy(&self) -> &AlarmPolicy {
        self.machine.context().policy()
    }

    /// Arm the system.
    pub fn arm(&mut self) {
        self.handle(AlarmEvent::Arm);
    }

    /// Try to disarm with `code`.
    pub fn disarm(&mut self, code: &str) {
        self.handle(AlarmEvent::Disarm(code.to_string()));
    }

    /// Report a breach.
    pub fn breach(&mut self) {
        self.handle(AlarmEvent::Breach);
    }

    /// Press the panic button.
    pub fn panic(&mut self) {
        self.handle(AlarmEvent::Panic);
    }

    /// Try to silence the alarm with `code`.
    pub fn reset(&mut self, code: &str) {
        self.handle(AlarmEvent::Reset(code.to_string()));
    }

    /// Dispatch an event value, reporting whether it caused a transition.
    pub fn handle(&mut self, event: AlarmEvent) -> Outcome {
        self.machine
            .dispatch(event.name(), |state, panel| event.apply(state, panel))
    }

    /// Wrap this system for use from several threads.
    pub fn into_shared(self) -> SharedSystem {
        SharedSystem {
            machine: SharedMachine::new(self.machine),
        }
    }
}

/// Thread-safe alarm system. Each event runs under one lock, hooks and
/// effects included.
///
/// Every call returns [`MachineError::Poisoned`] once a sink or hook has
/// panicked mid-event.
#[derive(Clone)]
pub struct SharedSystem {
    machine: SharedMachine<AlarmState, Panel>,
}

impl SharedSystem {
    /// Build a disarmed shared system without validating `config`.
    pub fn new(config: AlarmConfig, sink: impl NotificationSink + 'static) -> Self {
        System::new(config, sink).into_shared()
    }

    /// Id of the underlying machine.
    pub fn id(&self) -> Uuid {
        self.machine.id()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Result<AlarmState, MachineError> {
        self.machine.with(|machine| *machine.state())
    }

    /// Arm the system.
    pub fn arm(&self) -> Result<(), MachineError> {
        self.handle(AlarmEvent::Arm).map(drop)
    }

    /// Try to disarm with `code`.
    pub fn disarm(&self, code: &str) -> Result<(), MachineError> {
        self.handle(AlarmEvent::Disarm(code.to_string())).map(drop)
    }

    /// Report a breach.
    pub fn breach(&self) -> Result<(), MachineError> {
        self.handle(AlarmEvent::Breach).map(drop)
    }

    /// Press the panic button.
    pub fn panic(&self) -> Result<(), MachineError> {
        self.handle(AlarmEvent::Panic).map(drop)
    }

    /// Try to silence the alarm with `code`.
    pub fn reset(&self, code: &str) -> Result<(), MachineError> {
        self.handle(AlarmEvent::Reset(code.to_string())).map(drop)
    }

    /// Dispatch an event value under the lock.
    pub fn handle(&self, event: AlarmEvent) -> Result<Outcome, MachineError> {
        self.machine
            .dispatch(event.name(), |state, panel| event.apply(state, panel))
    }
}
