use super::logger::{LogLevel, LoggerConfig};

/// How a sweep reacts to failed checks and what it logs.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DispatchConfig {
    /// Sink kind built by [Sink::from_config](crate::Sink::from_config).
    #[serde(default)]
    pub policy: FailurePolicy,
    /// Logger for combinations and failures.
    #[serde(default)]
    pub logger: LoggerConfig<DispatchLogLevel>,
}

/// What to do when a check fails.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next check.
    #[default]
    #[serde(rename = "continue")]
    Continue,
    /// Stop the sweep on the first failure.
    #[serde(rename = "abort")]
    Abort,
}

/// Verbosity of the dispatch logger.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DispatchLogLevel {
    /// Nothing is logged.
    #[default]
    #[serde(rename = "disabled")]
    Disabled,
    /// Failed checks and errors only.
    #[serde(rename = "failures")]
    Failures,
    /// Every combination, plus failures.
    #[serde(rename = "full")]
    Full,
}

impl LogLevel for DispatchLogLevel {}
