use std::io;

use crate::{
    description::Description,
    formatter::{
        color::{ColorSetting, SupportsColor, colors::*},
        *,
    },
    outcome::{Failure, TestFailure, TestStatus},
};

/// Formats a run the way the built in test harness does.
///
/// ```text
/// running 3 tests
/// test testWithParams 1 ... ok
/// test testWithParams 2 ... FAILED
/// test testWithParams 3 ... ok
/// ```
///
/// followed by the messages of all failures and a `test result:` summary.
#[derive(Debug)]
pub struct PrettyFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
    current_failed: bool,
}

impl Default for PrettyFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: Default::default(),
            current_failed: false,
        }
    }
}

impl<W: io::Write> PrettyFormatter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyFormatter<WithTarget> {
        PrettyFormatter {
            target: with_target,
            color_setting: self.color_setting,
            current_failed: self.current_failed,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyFormatter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: io::Write + SupportsColor> PrettyFormatter<W> {
    /// Return whether this formatter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn write_colored(&mut self, color: &str, text: &str) -> io::Result<()> {
        match self.use_color() {
            true => write!(self.target, "{color}{text}{RESET}"),
            false => write!(self.target, "{text}"),
        }
    }

    fn write_failure(&mut self, name: &str, failure: &TestFailure) -> io::Result<()> {
        writeln!(self.target, "---- {name} stdout ----")?;
        match failure {
            TestFailure::Error(err) => writeln!(self.target, "Error: {err}"),
            TestFailure::Panicked(message) => writeln!(self.target, "{message}"),
            TestFailure::DidNotPanic { .. } => {
                writeln!(self.target, "note: test did not panic as expected")
            }
            TestFailure::PanicMismatch { got, expected } => {
                writeln!(self.target, "note: panic did not contain expected string")?;
                writeln!(self.target, "      panic message: {got:?}")?;
                writeln!(self.target, " expected substring: {expected:?}")
            }
            TestFailure::TimedOut(_) => writeln!(self.target, "{}", failure.message()),
        }
    }
}

impl<W: io::Write + SupportsColor> TestFormatter for PrettyFormatter<W> {
    type Error = io::Error;

    fn fmt_run_start(&mut self, data: FmtRunStart<'_>) -> Result<(), Self::Error> {
        match data.tests {
            1 => writeln!(self.target, "\nrunning 1 test"),
            count => writeln!(self.target, "\nrunning {count} tests"),
        }
    }

    fn fmt_test_started(&mut self, description: &Description) -> Result<(), Self::Error> {
        self.current_failed = false;
        write!(self.target, "test {} ... ", description.display_name())?;
        self.target.flush()
    }

    fn fmt_test_ignored(&mut self, data: FmtTestIgnored<'_>) -> Result<(), Self::Error> {
        write!(self.target, "test {} ... ", data.description.display_name())?;
        self.write_colored(YELLOW, "ignored")?;
        match data.reason {
            Some(reason) => writeln!(self.target, ", {reason}"),
            None => writeln!(self.target),
        }
    }

    fn fmt_test_failure(&mut self, _: &Failure) -> Result<(), Self::Error> {
        self.current_failed = true;
        Ok(())
    }

    fn fmt_test_finished(&mut self, _: &Description) -> Result<(), Self::Error> {
        match self.current_failed {
            true => self.write_colored(RED, "FAILED")?,
            false => self.write_colored(GREEN, "ok")?,
        }
        writeln!(self.target)
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'_>) -> Result<(), Self::Error> {
        let count = |predicate: fn(&TestStatus) -> bool| {
            data.outcomes
                .iter()
                .filter(|(_, status)| predicate(status))
                .count()
        };
        let passed = count(TestStatus::passed);
        let failed = count(TestStatus::failed);
        let ignored = count(TestStatus::ignored);

        let failures: Vec<_> = data
            .outcomes
            .iter()
            .filter_map(|(description, status)| match status {
                TestStatus::Failed(failure) => Some((description.display_name(), failure)),
                _ => None,
            })
            .collect();

        if !failures.is_empty() {
            writeln!(self.target)?;
            writeln!(self.target, "failures:")?;
            writeln!(self.target)?;
            for (name, failure) in failures.iter() {
                self.write_failure(name, failure)?;
                writeln!(self.target)?;
            }
            writeln!(self.target)?;
            writeln!(self.target, "failures:")?;
            for (name, _) in failures.iter() {
                writeln!(self.target, "    {name}")?;
            }
        }

        writeln!(self.target)?;
        write!(self.target, "test result: ")?;
        match failed {
            0 => self.write_colored(GREEN, "ok")?,
            _ => self.write_colored(RED, "FAILED")?,
        }
        writeln!(
            self.target,
            ". {passed} passed; {failed} failed; {ignored} ignored; 0 measured; {} filtered out; finished in {:.2}s",
            data.filtered_out,
            data.duration.as_secs_f64()
        )?;
        writeln!(self.target)
    }
}

impl<W: io::Write> TestListFormatter for PrettyFormatter<W> {
    type Error = io::Error;

    fn fmt_list_test(&mut self, description: &Description) -> Result<(), Self::Error> {
        writeln!(self.target, "{}: test", description.display_name())
    }

    fn fmt_end_listing(&mut self, tests: usize) -> Result<(), Self::Error> {
        match tests {
            1 => writeln!(self.target, "\n1 test"),
            count => writeln!(self.target, "\n{count} tests"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct Plain(Vec<u8>);

    impl io::Write for Plain {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SupportsColor for Plain {
        fn supports_color(&self) -> bool {
            false
        }
    }

    fn output(formatter: PrettyFormatter<Plain>) -> String {
        String::from_utf8_lossy(&formatter.into_target().0).into_owned()
    }

    #[test]
    fn writes_a_line_per_test_and_a_summary() {
        let ok = Description::test("Params", "testWithParams", "testWithParams 1");
        let bad = Description::test("Params", "testWithParams", "testWithParams 2");
        let skipped = Description::test("Params", "skipped", "skipped");
        let failure = TestFailure::Panicked("test failure".into());
        let outcomes = vec![
            (ok.clone(), TestStatus::Passed),
            (bad.clone(), TestStatus::Failed(failure.clone())),
            (
                skipped.clone(),
                TestStatus::Ignored {
                    reason: Some("later".into()),
                },
            ),
        ];

        let mut formatter = PrettyFormatter::default().with_target(Plain::default());
        let steps = [
            formatter.fmt_run_start(FmtRunStart {
                class: "Params",
                tests: 3,
                filtered_out: 1,
            }),
            formatter.fmt_test_started(&ok),
            formatter.fmt_test_finished(&ok),
            formatter.fmt_test_started(&bad),
            formatter.fmt_test_failure(&Failure::new(bad.clone(), failure)),
            formatter.fmt_test_finished(&bad),
            formatter.fmt_test_ignored(FmtTestIgnored {
                description: &skipped,
                reason: Some("later"),
            }),
            formatter.fmt_run_outcomes(FmtRunOutcomes {
                outcomes: &outcomes,
                filtered_out: 1,
                duration: Duration::from_millis(10),
            }),
        ];
        assert!(steps.iter().all(Result::is_ok));

        assert_eq!(
            output(formatter),
            "\nrunning 3 tests\n\
             test testWithParams 1 ... ok\n\
             test testWithParams 2 ... FAILED\n\
             test skipped ... ignored, later\n\
             \n\
             failures:\n\
             \n\
             ---- testWithParams 2 stdout ----\n\
             test failure\n\
             \n\
             \n\
             failures:\n    testWithParams 2\n\
             \n\
             test result: FAILED. 1 passed; 1 failed; 1 ignored; 0 measured; 1 filtered out; finished in 0.01s\n\
             \n"
        );
    }

    #[test]
    fn colors_when_asked_to() {
        let mut formatter = PrettyFormatter::default()
            .with_target(Plain::default())
            .with_color_setting(ColorSetting::Always);
        let ok = Description::test("Params", "ok", "ok");
        assert!(formatter.fmt_test_started(&ok).is_ok());
        assert!(formatter.fmt_test_finished(&ok).is_ok());
        assert_eq!(output(formatter), format!("test ok ... {GREEN}ok{RESET}\n"));
    }

    #[test]
    fn lists_tests() {
        let mut formatter = PrettyFormatter::default().with_target(Plain::default());
        let row = Description::test("Params", "testWithParams", "testWithParams 1");
        assert!(formatter.fmt_list_test(&row).is_ok());
        assert!(formatter.fmt_end_listing(1).is_ok());
        assert_eq!(output(formatter), "testWithParams 1: test\n\n1 test\n");
    }
}
