//! Alarm configuration and validation.
//!
//! Validation uses Stillwater's `Validation` type so that every problem
//! with a config is reported at once instead of stopping at the first.

use crate::alarm::error::{ConfigError, ConfigViolation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Behavioural knobs for the alarm states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmPolicy {
    /// Wrong disarm codes tolerated while armed. The attempt after the
    /// limit sounds the alarm and informs the administrator. `None`
    /// disables escalation.
    pub max_disarm_attempts: Option<u32>,

    /// Whether `panic` sounds the alarm while disarmed.
    pub panic_when_disarmed: bool,
}

impl AlarmPolicy {
    /// Unlimited disarm attempts and no panic while disarmed.
    pub fn classic() -> Self {
        Self {
            max_disarm_attempts: None,
            panic_when_disarmed: false,
        }
    }
}

impl Default for AlarmPolicy {
    fn default() -> Self {
        Self {
            max_disarm_attempts: Some(3),
            panic_when_disarmed: true,
        }
    }
}

/// Everything needed to build an alarm system.
///
/// # Example
///
/// ```rust
/// use tripwire::alarm::AlarmConfig;
///
/// let config = AlarmConfig::from_json(r#"{ "code": "1234" }"#).unwrap();
/// assert_eq!(config.code, "1234");
/// assert_eq!(config.policy.max_disarm_attempts, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// Secret code checked by disarm and reset.
    pub code: String,

    #[serde(default)]
    pub policy: AlarmPolicy,
}

impl AlarmConfig {
    /// Config with the given secret and the default policy.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            policy: AlarmPolicy::default(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: AlarmPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validated()
    }

    /// Run every check, accumulating ALL violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.code.is_empty() {
            Validation::fail(ConfigViolation::EmptyCode)
        } else {
            Validation::success(())
        });

        checks.push(if self.code.chars().any(char::is_whitespace) {
            Validation::fail(ConfigViolation::WhitespaceInCode)
        } else {
            Validation::success(())
        });

        if let Some(max) = self.policy.max_disarm_attempts {
            checks.push(if max == 0 {
                Validation::fail(ConfigViolation::ZeroAttempts)
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the config, returning it if every check passes.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
