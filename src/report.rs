use std::{process::Termination, time::Duration};

use crate::{description::Description, formatter::FormatErrors, outcome::TestStatus};

/// Every executed or ignored test of a run, in execution order.
pub type TestOutcomes = Vec<(Description, TestStatus)>;

#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport<FmtError> {
    pub outcomes: TestOutcomes,
    pub filtered_out: usize,
    pub duration: Duration,
    pub fmt_errors: FormatErrors<FmtError>,
}

impl<FmtError> RunReport<FmtError> {
    pub fn passed(&self) -> usize {
        self.count(TestStatus::passed)
    }

    pub fn failed(&self) -> usize {
        self.count(TestStatus::failed)
    }

    pub fn ignored(&self) -> usize {
        self.count(TestStatus::ignored)
    }

    fn count(&self, predicate: fn(&TestStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, status)| predicate(status))
            .count()
    }

    /// `SUCCESS` when nothing failed, `FAILURE` otherwise.
    ///
    /// Formatter errors do not count as failures.
    pub fn exit_code(&self) -> std::process::ExitCode {
        match self.outcomes.iter().any(|(_, status)| status.is_bad()) {
            true => std::process::ExitCode::FAILURE,
            false => std::process::ExitCode::SUCCESS,
        }
    }
}

impl<FmtError> Termination for RunReport<FmtError> {
    fn report(self) -> std::process::ExitCode {
        self.exit_code()
    }
}
