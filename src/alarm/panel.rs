//! Context handed to alarm states: secret code, policy and notice sink.

use crate::alarm::config::{AlarmConfig, AlarmPolicy};
use crate::alarm::notice::{Notice, NotificationSink};
use std::fmt;

/// Domain data owned by the alarm machine.
pub struct Panel {
    code: String,
    policy: AlarmPolicy,
    sink: Box<dyn NotificationSink>,
}

impl Panel {
    /// Take the code and policy from `config` and box the sink.
    pub fn new(config: AlarmConfig, sink: impl NotificationSink + 'static) -> Self {
        Self {
            code: config.code,
            policy: config.policy,
            sink: Box::new(sink),
        }
    }

    /// Policy the states consult.
    pub fn policy(&self) -> &AlarmPolicy {
        &self.policy
    }

    /// Compare `code` with the secret, announcing the result.
    pub fn is_valid(&mut self, code: &str) -> bool {
        let valid = code == self.code;
        self.notify(if valid {
            Notice::CodeAccepted
        } else {
            Notice::InvalidCode
        });
        valid
    }

    /// Forward a notice to the sink.
    pub fn notify(&mut self, notice: Notice) {
        self.sink.notify(notice);
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The secret stays out of logs.
        f.debug_struct("Panel")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::notice::Recorder;

    #[test]
    fn is_valid_accepts_matching_code() {
        let recorder = Recorder::new();
        let mut panel = Panel::new(AlarmConfig::new("1234"), recorder.clone());

        assert!(panel.is_valid("1234"));
        assert_eq!(recorder.notices(), vec![Notice::CodeAccepted]);
    }

    #[test]
    fn is_valid_rejects_other_codes() {
        let recorder = Recorder::new();
        let mut panel = Panel::new(AlarmConfig::new("1234"), recorder.clone());

        assert!(!panel.is_valid("0000"));
        assert!(!panel.is_valid(""));
        assert!(!panel.is_valid("12345"));
        assert_eq!(
            recorder.notices(),
            vec![Notice::InvalidCode, Notice::InvalidCode, Notice::InvalidCode]
        );
    }

    #[test]
    fn debug_does_not_leak_code() {
        let panel = Panel::new(AlarmConfig::new("secret-code"), Recorder::new());
        let rendered = format!("{:?}", panel);

        assert!(!rendered.contains("secret-code"));
        assert!(rendered.contains("policy"));
    }
}
