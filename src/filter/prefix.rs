use std::borrow::Cow;

use crate::{description::Description, filter::DescriptionFilter};

/// Keeps descriptions whose display name starts with a prefix.
///
/// This applies to suites too: a parameterized method survives a class level
/// `StartsWith` only if its own name has the prefix, which makes
/// `StartsWith::new("testWithParams")` select every row of that method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartsWith(pub String);

impl StartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }
}

impl DescriptionFilter for StartsWith {
    fn should_run(&self, description: &Description) -> bool {
        description.display_name().starts_with(self.0.as_str())
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("names starting with {:?}", self.0))
    }
}
