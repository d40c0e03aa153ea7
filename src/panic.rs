//! Panic handling.
//!
//! Test bodies fail by returning an error or by panicking. The panic handler
//! executes a body, catches the panic and turns the result into a
//! [`TestStatus`], honoring the method's [`PanicExpectation`].

use std::{
    any::Any,
    borrow::Cow,
    panic::{UnwindSafe, catch_unwind},
};

use crate::{
    class::TestMethod,
    outcome::{TestFailure, TestStatus},
    test::TestResult,
};

/// Whether a method is expected to panic.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum PanicExpectation {
    #[default]
    ShouldNotPanic,

    ShouldPanic,

    /// The panic message has to contain the given text.
    ShouldPanicWithExpected(Cow<'static, str>),
}

impl From<bool> for PanicExpectation {
    fn from(value: bool) -> Self {
        match value {
            true => Self::ShouldPanic,
            false => Self::ShouldNotPanic,
        }
    }
}

impl From<&'static str> for PanicExpectation {
    fn from(value: &'static str) -> Self {
        Self::ShouldPanicWithExpected(value.into())
    }
}

impl From<String> for PanicExpectation {
    fn from(value: String) -> Self {
        Self::ShouldPanicWithExpected(value.into())
    }
}

/// A strategy for executing a method body and translating panics into a
/// [`TestStatus`].
pub trait TestPanicHandler {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        method: &TestMethod,
    ) -> TestStatus;
}

/// Catches panics and checks them against the method's [`PanicExpectation`]:
/// - [`PanicExpectation::ShouldPanic`] treats a panic as a pass and a normal return as a failure
/// - [`PanicExpectation::ShouldPanicWithExpected`] additionally requires the panic message
///   to contain the expected text
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPanicHandler;

impl DefaultPanicHandler {
    /// Convert a panic payload into a string.
    ///
    /// `panic!` produces `&'static str` or `String` payloads, anything else
    /// becomes a placeholder.
    pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
        err.downcast::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|err| err.downcast::<String>().map(|s| *s))
            .unwrap_or_else(|_| String::from("Box<dyn Any>"))
    }
}

impl TestPanicHandler for DefaultPanicHandler {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        method: &TestMethod,
    ) -> TestStatus {
        let result = catch_unwind(f);
        TestStatus::Failed(match (result, &method.should_panic) {
            (Ok(result), PanicExpectation::ShouldNotPanic) => return result.into(),
            (Ok(_), PanicExpectation::ShouldPanic) => TestFailure::DidNotPanic { expected: None },
            (Ok(_), PanicExpectation::ShouldPanicWithExpected(expected)) => {
                TestFailure::DidNotPanic {
                    expected: Some(expected.to_string()),
                }
            }
            (Err(err), PanicExpectation::ShouldNotPanic) => {
                TestFailure::Panicked(Self::payload_as_string(err))
            }
            (Err(_), PanicExpectation::ShouldPanic) => return TestStatus::Passed,
            (Err(err), PanicExpectation::ShouldPanicWithExpected(expected)) => {
                let got = Self::payload_as_string(err);
                match got.contains(expected.as_ref()) {
                    true => return TestStatus::Passed,
                    false => TestFailure::PanicMismatch {
                        got,
                        expected: expected.to_string(),
                    },
                }
            }
        })
    }
}
