//! Runners build the tree of runnable units for a class and execute it.
//!
//! A [`ClassRunner`] splits the methods of a class into plain methods and
//! parameterized methods, giving each one a child runner. Parameter tables
//! are resolved and validated while building, so a class that gets a runner
//! at all is known to be runnable. Everything wrong with a class is reported
//! at once as an [`InitializationError`](crate::error::InitializationError).
//!
//! Runners do not write output, they report through a
//! [`RunNotifier`](crate::notifier::RunNotifier) and return the status of
//! every unit they ran.

use crate::{
    description::Description,
    executor::{DefaultExecutor, MethodExecutor},
    notifier::RunNotifier,
    report::TestOutcomes,
};

mod plain;
pub use plain::*;

mod parameterized;
pub use parameterized::*;

mod class;
pub use class::*;

/// One method of a class, ready to run.
#[derive(Debug)]
pub enum Child<E = DefaultExecutor> {
    Plain(PlainMethodRunner<E>),
    Parameterized(ParameterizedMethodRunner<E>),
}

impl<E> Child<E> {
    /// The declared name of the method.
    pub fn name(&self) -> &str {
        match self {
            Child::Plain(runner) => runner.name(),
            Child::Parameterized(runner) => runner.name(),
        }
    }

    /// See [`PlainMethodRunner::describe`] and
    /// [`ParameterizedMethodRunner::describe`].
    pub fn describe(&self) -> Description {
        match self {
            Child::Plain(runner) => runner.describe(),
            Child::Parameterized(runner) => runner.describe(),
        }
    }

    /// Number of tests this child currently runs.
    pub fn test_count(&self) -> usize {
        match self {
            Child::Plain(_) => 1,
            Child::Parameterized(runner) => runner.children().len(),
        }
    }
}

impl<E: MethodExecutor> Child<E> {
    /// Run the child and return one outcome per test, in run order.
    pub fn run(&self, notifier: &mut RunNotifier) -> TestOutcomes {
        match self {
            Child::Plain(runner) => vec![(runner.describe(), runner.run(notifier))],
            Child::Parameterized(runner) => runner.run(notifier),
        }
    }
}
