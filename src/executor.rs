//! Executing a single method.
//!
//! The executor is the one place that knows about ignore markers, expected
//! panics and timeouts. Runners hand it "this method, bound to these
//! arguments, reported under this description" and nothing more. Whatever the
//! body does, the executor reports it as events and never lets a failure
//! escape to the runner.

use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::RecvTimeoutError;

use crate::{
    class::TestMethod,
    description::Description,
    ignore::{IgnorePolicy, TestIgnore},
    notifier::RunNotifier,
    outcome::{Failure, TestFailure, TestStatus},
    panic::{DefaultPanicHandler, TestPanicHandler},
    value::ParamValue,
};

/// Executes one method bound to one argument row.
pub trait MethodExecutor {
    /// Execute `method` with `args`, reporting under `description`.
    ///
    /// Implementations emit `started`, an optional `failure` and `finished`,
    /// or only `ignored`. The returned status mirrors what was reported.
    fn execute(
        &self,
        method: &Arc<TestMethod>,
        args: &[ParamValue],
        description: &Description,
        notifier: &mut RunNotifier,
    ) -> TestStatus;
}

/// The executor used unless another one is configured.
///
/// Methods with a timeout (their own, or the default one) run on a helper
/// thread while the caller waits for at most that long. A body that overruns
/// is reported as timed out and left behind, the run continues with the
/// next unit.
#[derive(Debug, Clone)]
pub struct DefaultExecutor<Ignore = IgnorePolicy, PanicHandler = DefaultPanicHandler> {
    ignore: Ignore,
    panic_handler: PanicHandler,
    default_timeout: Option<Duration>,
}

impl Default for DefaultExecutor {
    fn default() -> Self {
        Self {
            ignore: IgnorePolicy::Default,
            panic_handler: DefaultPanicHandler,
            default_timeout: None,
        }
    }
}

impl DefaultExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Ignore, PanicHandler> DefaultExecutor<Ignore, PanicHandler> {
    pub fn with_ignore<WithIgnore: TestIgnore>(
        self,
        ignore: WithIgnore,
    ) -> DefaultExecutor<WithIgnore, PanicHandler> {
        DefaultExecutor {
            ignore,
            panic_handler: self.panic_handler,
            default_timeout: self.default_timeout,
        }
    }

    pub fn with_panic_handler<WithPanicHandler: TestPanicHandler>(
        self,
        panic_handler: WithPanicHandler,
    ) -> DefaultExecutor<Ignore, WithPanicHandler> {
        DefaultExecutor {
            ignore: self.ignore,
            panic_handler,
            default_timeout: self.default_timeout,
        }
    }

    /// Apply `timeout` to every method that does not declare its own.
    pub fn with_default_timeout(self, timeout: Duration) -> Self {
        Self {
            default_timeout: Some(timeout),
            ..self
        }
    }
}

impl<Ignore, PanicHandler> DefaultExecutor<Ignore, PanicHandler>
where
    PanicHandler: TestPanicHandler + Clone + Send + 'static,
{
    fn call(&self, method: &Arc<TestMethod>, args: &[ParamValue]) -> TestStatus {
        match method.timeout.or(self.default_timeout) {
            None => self.panic_handler.handle(|| method.call(args), method),
            Some(timeout) => self.call_with_timeout(method, args, timeout),
        }
    }

    fn call_with_timeout(
        &self,
        method: &Arc<TestMethod>,
        args: &[ParamValue],
        timeout: Duration,
    ) -> TestStatus {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let method = Arc::clone(method);
        let args = args.to_vec();
        let panic_handler = self.panic_handler.clone();

        let spawned = thread::Builder::new()
            .name(method.name.to_string())
            .spawn(move || {
                let status = panic_handler.handle(|| method.call(&args), &method);
                // The caller may have given up waiting already.
                let _ = tx.send(status);
            });
        if let Err(err) = spawned {
            return TestStatus::Failed(TestFailure::Error(format!(
                "could not spawn test thread: {err}"
            )));
        }

        match rx.recv_timeout(timeout) {
            Ok(status) => status,
            Err(RecvTimeoutError::Timeout) => TestStatus::Failed(TestFailure::TimedOut(timeout)),
            Err(RecvTimeoutError::Disconnected) => TestStatus::Failed(TestFailure::Error(
                String::from("test thread exited without reporting a status"),
            )),
        }
    }
}

impl<Ignore, PanicHandler> MethodExecutor for DefaultExecutor<Ignore, PanicHandler>
where
    Ignore: TestIgnore,
    PanicHandler: TestPanicHandler + Clone + Send + 'static,
{
    fn execute(
        &self,
        method: &Arc<TestMethod>,
        args: &[ParamValue],
        description: &Description,
        notifier: &mut RunNotifier,
    ) -> TestStatus {
        let ignored = self.ignore.ignore(method);
        if ignored.is_ignored() {
            notifier.fire_test_ignored(description, ignored.reason());
            return TestStatus::Ignored {
                reason: ignored.reason().map(|reason| reason.to_string().into()),
            };
        }

        notifier.fire_test_started(description);
        let status = self.call(method, args);
        if let TestStatus::Failed(failure) = &status {
            notifier.fire_test_failure(&Failure::new(description.clone(), failure.clone()));
        }
        notifier.fire_test_finished(description);
        status
    }
}
