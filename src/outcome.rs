use std::{borrow::Cow, time::Duration};

use crate::{description::Description, test::TestResult};

/// The status of one executed unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Ignored { reason: Option<Cow<'static, str>> },
    Failed(TestFailure),
}

impl TestStatus {
    pub fn is_good(&self) -> bool {
        matches!(self, TestStatus::Passed | TestStatus::Ignored { .. })
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn timed_out(&self) -> bool {
        matches!(self, TestStatus::Failed(TestFailure::TimedOut(_)))
    }

    pub fn ignored(&self) -> bool {
        matches!(self, TestStatus::Ignored { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The body returned an error.
    Error(String),
    Panicked(String),
    DidNotPanic {
        expected: Option<String>,
    },
    PanicMismatch {
        got: String,
        expected: String,
    },
    TimedOut(Duration),
}

impl TestFailure {
    /// The message reported along with the failure event.
    pub fn message(&self) -> String {
        match self {
            TestFailure::Error(err) => err.clone(),
            TestFailure::Panicked(msg) => msg.clone(),
            TestFailure::DidNotPanic { expected: None } => String::from("test did not panic"),
            TestFailure::DidNotPanic {
                expected: Some(expected),
            } => format!("test did not panic, expected a panic containing {expected:?}"),
            TestFailure::PanicMismatch { got, expected } => {
                format!("panic message {got:?} did not contain {expected:?}")
            }
            TestFailure::TimedOut(after) => {
                format!("test timed out after {} milliseconds", after.as_millis())
            }
        }
    }
}

impl From<TestResult> for TestStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => TestStatus::Passed,
            Err(err) => TestStatus::Failed(TestFailure::Error(err)),
        }
    }
}

/// A failed unit, as handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub description: Description,
    pub failure: TestFailure,
}

impl Failure {
    pub fn new(description: Description, failure: TestFailure) -> Self {
        Self {
            description,
            failure,
        }
    }

    pub fn message(&self) -> String {
        self.failure.message()
    }
}
