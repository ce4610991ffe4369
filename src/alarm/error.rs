//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating an alarm configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Secret code must not be empty")]
    EmptyCode,

    #[error("Secret code must not contain whitespace")]
    WhitespaceInCode,

    #[error("max_disarm_attempts must be at least 1")]
    ZeroAttempts,
}

/// Errors that can occur when loading an alarm configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for an `AlarmConfig`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but failed one or more checks
    #[error("Invalid config: {}", format_violations(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
