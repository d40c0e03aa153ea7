//! Output formatting.
//!
//! A formatter turns run events into output. During a run the harness moves
//! the formatter to its own thread and feeds it every event the runners emit,
//! so a slow target never holds up test execution.
//!
//! Every hook has a no-op default, implement just the ones you care about.
//! Errors returned by a hook do not stop the run, they are collected into the
//! [`RunReport`](crate::report::RunReport) together with the name of the hook
//! that failed.

use std::time::Duration;

use crate::{description::Description, outcome::Failure, report::TestOutcomes};

pub mod color;

pub mod no;
pub mod pretty;

/// Data for [`TestFormatter::fmt_run_start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FmtRunStart<'r> {
    pub class: &'r str,
    pub tests: usize,
    pub filtered_out: usize,
}

/// Data for [`TestFormatter::fmt_test_ignored`].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtTestIgnored<'r> {
    pub description: &'r Description,
    pub reason: Option<&'r str>,
}

/// Data for [`TestFormatter::fmt_run_outcomes`].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtRunOutcomes<'o> {
    pub outcomes: &'o TestOutcomes,
    pub filtered_out: usize,
    pub duration: Duration,
}

pub trait TestFormatter {
    type Error;

    fn fmt_run_start(&mut self, data: FmtRunStart<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_started(&mut self, description: &Description) -> Result<(), Self::Error> {
        let _ = description;
        Ok(())
    }

    fn fmt_test_ignored(&mut self, data: FmtTestIgnored<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_failure(&mut self, failure: &Failure) -> Result<(), Self::Error> {
        let _ = failure;
        Ok(())
    }

    fn fmt_test_finished(&mut self, description: &Description) -> Result<(), Self::Error> {
        let _ = description;
        Ok(())
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}

/// Formatting for `--list`.
pub trait TestListFormatter {
    type Error;

    fn fmt_list_test(&mut self, description: &Description) -> Result<(), Self::Error> {
        let _ = description;
        Ok(())
    }

    fn fmt_end_listing(&mut self, tests: usize) -> Result<(), Self::Error> {
        let _ = tests;
        Ok(())
    }
}

/// The hook that produced a formatter error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatError(pub &'static str);

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub type FormatErrors<E> = Vec<(FormatError, E)>;

pub(crate) trait FmtErrors<E> {
    fn push_on_error(&mut self, named: (FormatError, Result<(), E>));
}

impl<E> FmtErrors<E> for FormatErrors<E> {
    fn push_on_error(&mut self, (name, result): (FormatError, Result<(), E>)) {
        if let Err(err) = result {
            self.push((name, err));
        }
    }
}

/// Call a formatter hook and pair its result with the hook's name.
macro_rules! named_fmt {
    ($formatter:ident.$hook:ident($($arg:expr),* $(,)?)) => {
        (
            $crate::formatter::FormatError(stringify!($hook)),
            $formatter.$hook($($arg),*),
        )
    };
}

pub(crate) use named_fmt;

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl TestFormatter for Failing {
        type Error = &'static str;

        fn fmt_test_started(&mut self, _: &Description) -> Result<(), Self::Error> {
            Err("target closed")
        }
    }

    #[test]
    fn errors_are_named_after_their_hook() {
        let mut formatter = Failing;
        let description = Description::test("Class", "method", "method");
        let mut errors = FormatErrors::new();
        errors.push_on_error(named_fmt!(formatter.fmt_test_started(&description)));
        errors.push_on_error(named_fmt!(formatter.fmt_test_finished(&description)));
        assert_eq!(errors, [(FormatError("fmt_test_started"), "target closed")]);
    }
}
