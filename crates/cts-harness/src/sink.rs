use core::fmt::{Debug, Display};

use crate::config::{DispatchLogger, FailurePolicy, HarnessConfig};
use crate::{DiagnosticContext, HarnessError};

/// A failed check, tagged with the combination it happened on.
#[derive(new, Debug, Clone, PartialEq)]
pub struct Failure {
    context: DiagnosticContext,
    #[new(into)]
    message: String,
}

impl Failure {
    /// The combination that failed.
    pub fn context(&self) -> &DiagnosticContext {
        &self.context
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}", self.context, self.message)
    }
}

/// A combination an action chose not to run, e.g. because the device lacks a capability.
#[derive(new, Debug, Clone, PartialEq)]
pub struct Skip {
    context: DiagnosticContext,
    #[new(into)]
    reason: String,
}

impl Skip {
    /// The combination that was skipped.
    pub fn context(&self) -> &DiagnosticContext {
        &self.context
    }

    /// Why it was skipped.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Where actions report failed checks.
///
/// A sink decides whether a failure stops the sweep: [Recorder] keeps going, [AbortOnFailure]
/// returns an error the action propagates with `?`.
pub trait AssertionSink {
    /// Report a failure. An error means the sweep must stop.
    fn report(&self, failure: Failure) -> Result<(), HarnessError>;

    /// Note that a combination isn't run. Skips are never failures.
    fn skip(&self, context: &DiagnosticContext, reason: &str);

    /// Report `message` when `condition` doesn't hold.
    fn check(
        &self,
        condition: bool,
        context: &DiagnosticContext,
        message: &str,
    ) -> Result<(), HarnessError> {
        if condition {
            Ok(())
        } else {
            self.report(Failure::new(context.clone(), message))
        }
    }

    /// Report a mismatch when `actual != expected`.
    fn check_eq<T: PartialEq + Debug>(
        &self,
        actual: T,
        expected: T,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError>
    where
        Self: Sized,
    {
        if actual == expected {
            Ok(())
        } else {
            self.report(Failure::new(
                context.clone(),
                format!("Expected {expected:?}, got {actual:?}"),
            ))
        }
    }
}

#[derive(Default, Debug)]
struct RecorderState {
    failures: Vec<Failure>,
    skipped: Vec<Skip>,
}

/// Record-and-continue sink: failures are kept and the sweep goes on.
#[derive(Debug, Default)]
pub struct Recorder {
    state: spin::Mutex<RecorderState>,
}

impl Recorder {
    /// Create an empty recorder. Failures are also written to the shared dispatch logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures recorded so far, in report order.
    pub fn failures(&self) -> Vec<Failure> {
        self.state.lock().failures.clone()
    }

    /// Skips recorded so far, in report order.
    pub fn skipped(&self) -> Vec<Skip> {
        self.state.lock().skipped.clone()
    }

    /// Whether any failure was recorded.
    pub fn has_failures(&self) -> bool {
        !self.state.lock().failures.is_empty()
    }

    /// Counts of recorded failures and skips.
    pub fn summary(&self) -> Summary {
        let state = self.state.lock();
        Summary {
            failed: state.failures.len(),
            skipped: state.skipped.len(),
        }
    }
}

impl AssertionSink for Recorder {
    fn report(&self, failure: Failure) -> Result<(), HarnessError> {
        log::error!("{failure}");
        DispatchLogger::with_global(|logger| logger.log_failure(&failure));
        self.state.lock().failures.push(failure);

        Ok(())
    }

    fn skip(&self, context: &DiagnosticContext, reason: &str) {
        log::warn!("Skipping [{context}]: {reason}");
        self.state
            .lock()
            .skipped
            .push(Skip::new(context.clone(), reason));
    }
}

/// Abort sink: the first failure is recorded and turned into [HarnessError::Aborted].
#[derive(Debug, Default)]
pub struct AbortOnFailure {
    recorder: Recorder,
}

impl AbortOnFailure {
    /// Create an abort sink. Failures are also written to the shared dispatch logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying record of failures and skips.
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }
}

impl AssertionSink for AbortOnFailure {
    fn report(&self, failure: Failure) -> Result<(), HarnessError> {
        let err = HarnessError::Aborted {
            context: failure.context().composed_name(),
            message: failure.message().to_string(),
        };
        self.recorder.report(failure)?;

        Err(err)
    }

    fn skip(&self, context: &DiagnosticContext, reason: &str) {
        self.recorder.skip(context, reason)
    }
}

/// Sink picked from a [FailurePolicy].
#[derive(Debug)]
pub enum Sink {
    /// Record and continue.
    Continue(Recorder),
    /// Stop on the first failure.
    Abort(AbortOnFailure),
}

impl Sink {
    /// Build the sink matching the policy.
    pub fn from_policy(policy: FailurePolicy) -> Self {
        match policy {
            FailurePolicy::Continue => Sink::Continue(Recorder::new()),
            FailurePolicy::Abort => Sink::Abort(AbortOnFailure::new()),
        }
    }

    /// Build the sink matching the globally configured policy.
    pub fn from_config() -> Self {
        Self::from_policy(HarnessConfig::get().dispatch.policy)
    }

    /// The record of failures and skips, whatever the policy.
    pub fn recorder(&self) -> &Recorder {
        match self {
            Sink::Continue(recorder) => recorder,
            Sink::Abort(sink) => sink.recorder(),
        }
    }
}

impl AssertionSink for Sink {
    fn report(&self, failure: Failure) -> Result<(), HarnessError> {
        match self {
            Sink::Continue(recorder) => recorder.report(failure),
            Sink::Abort(sink) => sink.report(failure),
        }
    }

    fn skip(&self, context: &DiagnosticContext, reason: &str) {
        match self {
            Sink::Continue(recorder) => recorder.skip(context, reason),
            Sink::Abort(sink) => sink.skip(context, reason),
        }
    }
}

/// Failure and skip counts of a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of failed checks.
    pub failed: usize,
    /// Number of skipped combinations.
    pub skipped: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed, {} skipped", self.failed, self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(names: &[&str]) -> DiagnosticContext {
        DiagnosticContext::new(
            0,
            vec![0; names.len()],
            names.iter().map(|name| name.to_string()).collect(),
        )
    }

    #[test]
    fn recorder_keeps_going() {
        let sink = Recorder::new();
        let ctx = context(&["f32", "4"]);

        assert_eq!(sink.check(false, &ctx, "wrong sum"), Ok(()));
        assert_eq!(sink.check_eq(3, 4, &ctx), Ok(()));
        assert_eq!(sink.check(true, &ctx, "unused"), Ok(()));

        let failures = sink.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].to_string(), "[f32,4] wrong sum");
        assert_eq!(failures[1].message(), "Expected 4, got 3");
    }

    #[test]
    fn abort_sink_returns_an_error() {
        let sink = AbortOnFailure::new();
        let ctx = context(&["i8"]);

        let result = sink.check(false, &ctx, "overflow");

        assert_eq!(
            result,
            Err(HarnessError::Aborted {
                context: "i8".to_string(),
                message: "overflow".to_string(),
            })
        );
        assert_eq!(sink.recorder().failures().len(), 1);
    }

    #[test]
    fn skips_are_not_failures() {
        let sink = Sink::from_policy(FailurePolicy::Abort);
        let ctx = context(&["f64"]);

        sink.skip(&ctx, "device has no fp64 support");

        assert!(!sink.recorder().has_failures());
        assert_eq!(
            sink.recorder().summary(),
            Summary {
                failed: 0,
                skipped: 1
            }
        );
        assert_eq!(sink.recorder().skipped()[0].reason(), "device has no fp64 support");
    }
}
