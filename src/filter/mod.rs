//! Test filtering.
//!
//! A filter decides which units stay in a run by looking at their
//! [`Description`]s. Filtered units are removed from their runner entirely:
//! they are not reported, not even as ignored.
//!
//! Runners apply a filter top down. A class runner keeps a child when the
//! child's description passes, and a parameterized child is then pruned row
//! by row with the same filter. The same filter can also be handed to a
//! single parameterized runner to narrow just that method.
//!
//! Implement [`DescriptionFilter`] for custom selection, or use a closure.

use std::borrow::Cow;

use crate::description::Description;

mod no;
pub use no::*;

mod default;
pub use default::*;

mod prefix;
pub use prefix::*;

/// A predicate over descriptions.
pub trait DescriptionFilter {
    /// Whether the unit described by `description` should run.
    ///
    /// This is asked for suites as well as for single tests. A filter that
    /// only targets tests should let a suite pass when any of its children
    /// pass, otherwise the suite is dropped before its children are looked at.
    fn should_run(&self, description: &Description) -> bool;

    /// A short human readable summary, used in error messages.
    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("custom filter")
    }
}

impl<F> DescriptionFilter for F
where
    F: Fn(&Description) -> bool,
{
    fn should_run(&self, description: &Description) -> bool {
        self(description)
    }
}

/// Split `items` into those whose description passes `filter` and the count
/// of those that do not.
///
/// The input is left untouched, the retained set is a new vector in the
/// original order.
pub(crate) fn retain_matching<T, F>(
    items: &[T],
    filter: &F,
    describe: impl Fn(&T) -> &Description,
) -> (Vec<T>, usize)
where
    T: Clone,
    F: DescriptionFilter + ?Sized,
{
    let retained: Vec<T> = items
        .iter()
        .filter(|&item| filter.should_run(describe(item)))
        .cloned()
        .collect();
    let filtered_out = items.len() - retained.len();
    (retained, filtered_out)
}
