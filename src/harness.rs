//! Running a whole class with output.
//!
//! [`harness`] is the entry point for running a class from a `main` function,
//! e.g. in a test target with `harness = false`:
//!
//! ```no_run
//! use std::process::Termination;
//!
//! use paramtest::{class::*, filter::DefaultFilter, table, value::ParamType};
//!
//! fn main() -> impl Termination {
//!     let class = TestClass::new("Params")
//!         .field(FieldDecl::new("someParams", table![[1, 2], [3, 4]]))
//!         .method(
//!             TestMethod::new("adds", |args: &[_]| {
//!                 assert!(args[0].as_int() < args[1].as_int());
//!             })
//!             .params([ParamType::Int, ParamType::Int])
//!             .with_parameters("someParams"),
//!         );
//!
//!     paramtest::harness(&class)
//!         .with_filter(DefaultFilter::from_args(std::env::args().skip(1)))
//!         .run()
//! }
//! ```

use std::{io, panic, thread, time::Instant};

use crate::{
    class::TestClass,
    error::InitializationError,
    executor::{DefaultExecutor, MethodExecutor},
    filter::{DefaultFilter, DescriptionFilter},
    formatter::{
        FmtErrors, FmtRunOutcomes, FmtRunStart, FmtTestIgnored, FormatErrors, TestFormatter,
        TestListFormatter, named_fmt, pretty::PrettyFormatter,
    },
    notifier::{ChannelListener, RunEvent, RunNotifier},
    report::RunReport,
    runner::ClassRunner,
};

/// Events buffered between the runner and the formatter thread.
const EVENT_BUFFER: usize = 64;

/// A harness for `class` with the default filter, executor and formatter.
pub fn harness(
    class: &TestClass,
) -> ClassHarness<'_, DefaultFilter, DefaultExecutor, PrettyFormatter<io::Stdout>> {
    ClassHarness {
        class,
        filter: DefaultFilter::default(),
        executor: DefaultExecutor::default(),
        formatter: PrettyFormatter::default(),
    }
}

pub struct ClassHarness<'c, Filter, Executor, Formatter> {
    class: &'c TestClass,
    filter: Filter,
    executor: Executor,
    formatter: Formatter,
}

impl<'c, Filter, Executor, Formatter> ClassHarness<'c, Filter, Executor, Formatter>
where
    Filter: DescriptionFilter,
    Executor: MethodExecutor,
    Formatter: TestFormatter + Send,
    Formatter::Error: Send,
{
    /// Build the class runner, filter it and run what is left.
    ///
    /// Fails only if the class itself is broken. A filter that matches
    /// nothing results in an empty run.
    pub fn run(self) -> Result<RunReport<Formatter::Error>, InitializationError> {
        let now = Instant::now();

        let mut runner = ClassRunner::build(self.class, self.executor)?;
        let scheduled = runner.test_count();
        let filtered_out = runner.filter(&self.filter).unwrap_or(scheduled);

        let mut formatter = self.formatter;
        let mut fmt_errors = FormatErrors::new();
        fmt_errors.push_on_error(named_fmt!(formatter.fmt_run_start(FmtRunStart {
            class: runner.name(),
            tests: runner.test_count(),
            filtered_out,
        })));

        let (outcomes, mut formatter, mut fmt_errors) = thread::scope(|scope| {
            let (tx, rx) = crossbeam_channel::bounded(EVENT_BUFFER);
            let fmt_thread = scope.spawn(move || {
                while let Ok(event) = rx.recv() {
                    fmt_errors.push_on_error(match &event {
                        RunEvent::Started(description) => {
                            named_fmt!(formatter.fmt_test_started(description))
                        }
                        RunEvent::Finished(description) => {
                            named_fmt!(formatter.fmt_test_finished(description))
                        }
                        RunEvent::Failure(failure) => {
                            named_fmt!(formatter.fmt_test_failure(failure))
                        }
                        RunEvent::Ignored {
                            description,
                            reason,
                        } => named_fmt!(formatter.fmt_test_ignored(FmtTestIgnored {
                            description,
                            reason: reason.as_deref(),
                        })),
                    });
                }
                (formatter, fmt_errors)
            });

            let mut notifier = RunNotifier::new().with_listener(ChannelListener::new(tx));
            let outcomes = runner.run(&mut notifier);
            drop(notifier);

            match fmt_thread.join() {
                Ok((formatter, fmt_errors)) => (outcomes, formatter, fmt_errors),
                Err(payload) => panic::resume_unwind(payload),
            }
        });

        let duration = now.elapsed();
        fmt_errors.push_on_error(named_fmt!(formatter.fmt_run_outcomes(FmtRunOutcomes {
            outcomes: &outcomes,
            filtered_out,
            duration,
        })));

        Ok(RunReport {
            outcomes,
            filtered_out,
            duration,
            fmt_errors,
        })
    }
}

impl<'c, Filter, Executor, Formatter> ClassHarness<'c, Filter, Executor, Formatter>
where
    Filter: DescriptionFilter,
    Formatter: TestListFormatter,
{
    /// Write the name of every test the filter retains.
    pub fn list(self) -> Result<FormatErrors<Formatter::Error>, InitializationError> {
        let mut runner = ClassRunner::build(self.class, self.executor)?;
        // A filter matching nothing lists nothing.
        let _ = runner.filter(&self.filter);

        let mut formatter = self.formatter;
        let mut fmt_errors = FormatErrors::new();
        let description = runner.describe();
        let leaves = description.leaves();
        for leaf in leaves.iter() {
            fmt_errors.push_on_error(named_fmt!(formatter.fmt_list_test(leaf)));
        }
        fmt_errors.push_on_error(named_fmt!(formatter.fmt_end_listing(leaves.len())));
        Ok(fmt_errors)
    }
}

impl<'c, Filter, Executor, Formatter> ClassHarness<'c, Filter, Executor, Formatter> {
    pub fn with_filter<WithFilter: DescriptionFilter>(
        self,
        filter: WithFilter,
    ) -> ClassHarness<'c, WithFilter, Executor, Formatter> {
        ClassHarness {
            class: self.class,
            filter,
            executor: self.executor,
            formatter: self.formatter,
        }
    }

    pub fn with_executor<WithExecutor: MethodExecutor>(
        self,
        executor: WithExecutor,
    ) -> ClassHarness<'c, Filter, WithExecutor, Formatter> {
        ClassHarness {
            class: self.class,
            filter: self.filter,
            executor,
            formatter: self.formatter,
        }
    }

    pub fn with_formatter<WithFormatter>(
        self,
        formatter: WithFormatter,
    ) -> ClassHarness<'c, Filter, Executor, WithFormatter> {
        ClassHarness {
            class: self.class,
            filter: self.filter,
            executor: self.executor,
            formatter,
        }
    }
}
