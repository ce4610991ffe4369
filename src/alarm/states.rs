//! Alarm states and the events they respond to.

use crate::alarm::notice::Notice;
use crate::alarm::panel::Panel;
use crate::core::{State, Transition};

/// Transition between alarm states.
pub type AlarmTransition = Transition<AlarmState, Panel>;

/// Handlers for every alarm event.
///
/// Each handler defaults to `None`, meaning the event is ignored in that
/// state. States override only the events they react to.
pub trait AlarmEvents {
    fn arm(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        None
    }

    fn disarm(&mut self, _code: &str, _panel: &mut Panel) -> Option<AlarmTransition> {
        None
    }

    fn breach(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        None
    }

    fn panic(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        None
    }

    fn reset(&mut self, _code: &str, _panel: &mut Panel) -> Option<AlarmTransition> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disarmed;

impl State<Panel> for Disarmed {
    fn name(&self) -> &str {
        "Disarmed"
    }

    fn enter(&self, panel: &mut Panel) {
        panel.notify(Notice::SystemDisarmed);
    }
}

impl AlarmEvents for Disarmed {
    fn arm(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        Some(Transition::new(Armed::default().into()))
    }

    fn panic(&mut self, panel: &mut Panel) -> Option<AlarmTransition> {
        panel
            .policy()
            .panic_when_disarmed
            .then(|| Transition::new(Alarm.into()))
    }
}

/// Armed state. Counts disarm attempts for the current activation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Armed {
    disarm_attempts: u32,
}

impl Armed {
    /// Disarm attempts made since this activation began.
    pub fn disarm_attempts(&self) -> u32 {
        self.disarm_attempts
    }
}

impl State<Panel> for Armed {
    fn name(&self) -> &str {
        "Armed"
    }

    fn enter(&self, panel: &mut Panel) {
        panel.notify(Notice::SystemArmed);
    }
}

impl AlarmEvents for Armed {
    fn disarm(&mut self, code: &str, panel: &mut Panel) -> Option<AlarmTransition> {
        self.disarm_attempts = self.disarm_attempts.saturating_add(1);

        if panel.is_valid(code) {
            return Some(Transition::new(Disarmed.into()));
        }

        match panel.policy().max_disarm_attempts {
            Some(max) if self.disarm_attempts > max => {
                tracing::warn!(
                    attempts = self.disarm_attempts,
                    max,
                    "disarm attempts exhausted, escalating"
                );
                Some(
                    Transition::new(Alarm.into()).with_effect(|panel: &mut Panel| {
                        panel.notify(Notice::AdministratorInformed)
                    }),
                )
            }
            _ => None,
        }
    }

    fn breach(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        Some(Transition::new(Alarm.into()))
    }

    fn panic(&mut self, _panel: &mut Panel) -> Option<AlarmTransition> {
        Some(Transition::new(Alarm.into()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alarm;

impl State<Panel> for Alarm {
    fn name(&self) -> &str {
        "Alarm"
    }

    fn enter(&self, panel: &mut Panel) {
        panel.notify(Notice::AlarmSounded);
    }

    fn exit(&self, panel: &mut Panel) {
        panel.notify(Notice::AlarmStopped);
    }
}

impl AlarmEvents for Alarm {
    fn reset(&mut self, code: &str, panel: &mut Panel) -> Option<AlarmTransition> {
        panel
            .is_valid(code)
            .then(|| Transition::new(Disarmed.into()))
    }
}

/// The current state of an alarm system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    Disarmed(Disarmed),
    Armed(Armed),
    Alarm(Alarm),
}

impl AlarmState {
    /// Whether the system is disarmed.
    pub fn is_disarmed(&self) -> bool {
        matches!(self, Self::Disarmed(_))
    }

    /// Whether the system is armed.
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    /// Whether the alarm is sounding.
    pub fn is_alarm(&self) -> bool {
        matches!(self, Self::Alarm(_))
    }
}

impl Default for AlarmState {
    fn default() -> Self {
        Self::Disarmed(Disarmed)
    }
}

impl From<Disarmed> for AlarmState {
    fn from(state: Disarmed) -> Self {
        Self::Disarmed(state)
    }
}

impl From<Armed> for AlarmState {
    fn from(state: Armed) -> Self {
        Self::Armed(state)
    }
}

impl From<Alarm> for AlarmState {
    fn from(state: Alarm) -> Self {
        Self::Alarm(state)
    }
}

/// Forward a call to whichever variant is current.
macro_rules! each_variant {
    ($value:expr, $state:ident => $body:expr) => {
        match $value {
            AlarmState::Disarmed($state) => $body,
            AlarmState::Armed($state) => $body,
            AlarmState::Alarm($state) => $body,
        }
    };
}

impl State<Panel> for AlarmState {
    fn name(&self) -> &str {
        each_variant!(self, state => state.name())
    }

    fn enter(&self, panel: &mut Panel) {
        each_variant!(self, state => state.enter(panel))
    }

    fn exit(&self, panel: &mut Panel) {
        each_variant!(self, state => state.exit(panel))
    }
}

impl AlarmEvents for AlarmState {
    fn arm(&mut self, panel: &mut Panel) -> Option<AlarmTransition> {
        each_variant!(self, state => state.arm(panel))
    }

    fn disarm(&mut self, code: &str, panel: &mut Panel) -> Option<AlarmTransition> {
        each_variant!(self, state => state.disarm(code, panel))
    }

    fn breach(&mut self, panel: &mut Panel) -> Option<AlarmTransition> {
        each_variant!(self, state => state.breach(panel))
    }

    fn panic(&mut self, panel: &mut Panel) -> Option<AlarmTransition> {
        each_variant!(self, state => state.panic(panel))
    }

    fn reset(&mut self, code: &str, panel: &mut Panel) -> Option<AlarmTransition> {
        each_variant!(self, state => state.reset(code, panel))
    }
}
