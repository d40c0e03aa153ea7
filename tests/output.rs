use std::{
    io,
    process::ExitCode,
    sync::{Arc, LazyLock, Mutex},
};

use paramtest::{
    class::{FieldDecl, TestClass, TestMethod},
    filter::DefaultFilter,
    formatter::{color::SupportsColor, pretty::PrettyFormatter},
    table,
    value::{ParamType, ParamValue},
};
use pretty_assertions::assert_eq;
use regex::Regex;

#[derive(Debug, Default, Clone)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    fn sanitized(&self) -> String {
        let raw = String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned();
        sanitize_duration(&raw)
    }
}

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"finished in \d+\.\d{2}s").unwrap());

fn sanitize_duration(input: &str) -> String {
    DURATION_RE
        .replace_all(input, "finished in <duration>")
        .into_owned()
}

fn class() -> TestClass {
    TestClass::new("Params")
        .field(FieldDecl::new("someParams", table![[1], [2], [3]]).private())
        .method(
            TestMethod::new("testWithParams", |args: &[ParamValue]| {
                if args[0].as_int() == Some(2) {
                    panic!("test failure");
                }
            })
            .params([ParamType::Int])
            .with_parameters("someParams"),
        )
        .method(TestMethod::new("skipped", |_| ()).ignore("not today"))
        .method(TestMethod::new("fails", |_| Err::<(), _>("broken")))
}

#[test]
fn prints_like_the_builtin_harness() {
    let buffer = Buffer::default();
    let report = paramtest::harness(&class())
        .with_filter(DefaultFilter::new().with_skip("fails"))
        .with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
        .run()
        .unwrap();

    assert_eq!(report.exit_code(), ExitCode::FAILURE);
    assert_eq!(
        buffer.sanitized(),
        r#"
running 4 tests
test testWithParams 1 ... ok
test testWithParams 2 ... FAILED
test testWithParams 3 ... ok
test skipped ... ignored, not today

failures:

---- testWithParams 2 stdout ----
test failure


failures:
    testWithParams 2

test result: FAILED. 2 passed; 1 failed; 1 ignored; 0 measured; 1 filtered out; finished in <duration>

"#
    );
}

#[test]
fn returned_errors_are_printed_with_their_debug_form() {
    let buffer = Buffer::default();
    let report = paramtest::harness(&class())
        .with_filter(DefaultFilter::new().with_filter("fails").with_exact(true))
        .with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
        .run()
        .unwrap();

    assert_eq!(report.filtered_out, 4);
    assert!(buffer.sanitized().contains(
        "---- fails stdout ----\nError: \"broken\"\n"
    ));
}

#[test]
fn a_filter_matching_nothing_is_an_empty_run() {
    let buffer = Buffer::default();
    let report = paramtest::harness(&class())
        .with_filter(DefaultFilter::new().with_filter("nothing"))
        .with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
        .run()
        .unwrap();

    assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    assert_eq!(
        buffer.sanitized(),
        "\nrunning 0 tests\n\ntest result: ok. 0 passed; 0 failed; 0 ignored; 0 measured; 5 filtered out; finished in <duration>\n\n"
    );
}
