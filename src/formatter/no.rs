use crate::formatter::*;

/// A formatter that produces no output.
///
/// Useful when running a class from inside another harness that does its own
/// reporting, or when only the [`RunReport`](crate::report::RunReport) is of
/// interest.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFormatter;

impl TestFormatter for NoFormatter {
    type Error = ();
}

impl TestListFormatter for NoFormatter {
    type Error = ();
}
