use std::borrow::Cow;

use crate::{description::Description, filter::DescriptionFilter};

/// Name based selection as known from `cargo test`.
///
/// A test is selected when any filter matches and no skip matches. Patterns
/// are matched against the reported name and against the declared method
/// name, so `--exact testWithParams` selects every row of that method while
/// `--exact "testWithParams 2"` selects just one row. Without `exact`,
/// patterns match as substrings.
///
/// Suites pass when any of their children pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefaultFilter {
    exact: bool,
    filter: Vec<String>,
    skip: Vec<String>,
}

/// Flags of the built in test harness that take a value.
const VALUE_FLAGS: &[&str] = &["--test-threads", "--format", "--color", "--logfile", "-Z"];

impl DefaultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter.push(filter.into());
        self
    }

    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip.push(skip.into());
        self
    }

    /// Read filters from command line arguments, without the program name.
    ///
    /// Understands positional filters, `--skip <name>`, `--skip=<name>` and
    /// `--exact`. Other flags are ignored, together with the value of the
    /// flags known to take one.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--exact" => out.exact = true,
                "--skip" => out.skip.extend(args.next()),
                flag if VALUE_FLAGS.contains(&flag) => {
                    args.next();
                }
                flag if flag.starts_with("--skip=") => {
                    out.skip.push(flag["--skip=".len()..].to_string())
                }
                flag if flag.starts_with('-') => (),
                _ => out.filter.push(arg),
            }
        }
        out
    }

    fn matches(&self, pattern: &str, description: &Description) -> bool {
        let mut names = [Some(description.display_name()), description.method_name()]
            .into_iter()
            .flatten();
        match self.exact {
            true => names.any(|name| name == pattern),
            false => names.any(|name| name.contains(pattern)),
        }
    }
}

impl DescriptionFilter for DefaultFilter {
    fn should_run(&self, description: &Description) -> bool {
        if self.filter.is_empty() && self.skip.is_empty() {
            return true;
        }

        if description.is_suite() {
            return description
                .children()
                .iter()
                .any(|child| self.should_run(child));
        }

        let in_filter =
            self.filter.is_empty() || self.filter.iter().any(|f| self.matches(f, description));
        let skipped = self.skip.iter().any(|s| self.matches(s, description));
        in_filter && !skipped
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "filters {:?} skipping {:?}{}",
            self.filter,
            self.skip,
            if self.exact { " (exact)" } else { "" }
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> Description {
        Description::test("Mixed", "testWithParams", name)
    }

    fn plain() -> Description {
        Description::test("Mixed", "testWithoutParams", "testWithoutParams")
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = DefaultFilter::new();
        assert!(filter.should_run(&plain()));
        assert!(filter.should_run(&Description::suite("empty")));
    }

    #[test]
    fn substring_matching() {
        let filter = DefaultFilter::new().with_filter("run2");
        assert!(filter.should_run(&row("testWithParams run2")));
        assert!(!filter.should_run(&row("testWithParams run1")));
        assert!(!filter.should_run(&plain()));
    }

    #[test]
    fn exact_matching_on_method_names_selects_all_rows() {
        let filter = DefaultFilter::new().with_exact(true).with_filter("testWithParams");
        assert!(filter.should_run(&row("testWithParams run1")));
        assert!(filter.should_run(&row("testWithParams run2")));
        assert!(!filter.should_run(&plain()));
    }

    #[test]
    fn skips_win_over_filters() {
        let filter = DefaultFilter::new()
            .with_filter("testWith")
            .with_exact(true)
            .with_skip("testWithParams run1");
        assert!(!filter.should_run(&row("testWithParams run1")));
        assert!(!filter.should_run(&row("testWithParams run2")));

        let filter = DefaultFilter::new().with_skip("run1");
        assert!(!filter.should_run(&row("testWithParams run1")));
        assert!(filter.should_run(&row("testWithParams run2")));
    }

    #[test]
    fn suites_pass_through_their_children() {
        let suite = Description::suite("testWithParams")
            .with_method_name("testWithParams")
            .with_children([row("testWithParams run1"), row("testWithParams run2")]);
        assert!(DefaultFilter::new().with_filter("run2").should_run(&suite));
        assert!(!DefaultFilter::new().with_filter("run3").should_run(&suite));
    }

    #[test]
    fn parses_cargo_test_arguments() {
        let filter = DefaultFilter::from_args([
            "--test-threads",
            "1",
            "run",
            "--skip",
            "run1",
            "--skip=run3",
            "--nocapture",
            "--exact",
        ]);
        assert_eq!(
            filter,
            DefaultFilter {
                exact: true,
                filter: vec!["run".into()],
                skip: vec!["run1".into(), "run3".into()],
            }
        );
    }
}
