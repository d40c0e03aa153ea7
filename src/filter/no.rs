use std::borrow::Cow;

use crate::{description::Description, filter::DescriptionFilter};

/// A filter that keeps everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFilter;

impl DescriptionFilter for NoFilter {
    fn should_run(&self, _: &Description) -> bool {
        true
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("all tests")
    }
}
