//! Ignoring test methods.
//!
//! A method carries an [`IgnoreStatus`] marker. The executor decides per
//! executed unit whether that marker is honored, so a parameterized method
//! marked once is reported as ignored once for every one of its rows.
//!
//! Ignoring is different to filtering: filtered tests are gone from the run,
//! ignored tests are still reported, just never started.

use std::borrow::Cow;

use crate::class::TestMethod;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum IgnoreStatus {
    #[default]
    Run,
    Ignore,
    IgnoreWithReason(Cow<'static, str>),
}

impl IgnoreStatus {
    pub fn is_ignored(&self) -> bool {
        !matches!(self, IgnoreStatus::Run)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            IgnoreStatus::IgnoreWithReason(reason) => Some(reason.as_ref()),
            IgnoreStatus::Run | IgnoreStatus::Ignore => None,
        }
    }
}

impl From<bool> for IgnoreStatus {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Ignore,
            false => Self::Run,
        }
    }
}

impl From<&'static str> for IgnoreStatus {
    fn from(value: &'static str) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

impl From<String> for IgnoreStatus {
    fn from(value: String) -> Self {
        Self::IgnoreWithReason(value.into())
    }
}

/// A strategy deciding whether a method is ignored for this run.
pub trait TestIgnore {
    fn ignore(&self, method: &TestMethod) -> IgnoreStatus;
}

impl<F> TestIgnore for F
where
    F: Fn(&TestMethod) -> IgnoreStatus,
{
    fn ignore(&self, method: &TestMethod) -> IgnoreStatus {
        self(method)
    }
}

/// The ignore policies known from `cargo test`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IgnorePolicy {
    /// Run everything, even methods marked as ignored.
    IncludeIgnored,

    /// Run only methods marked as ignored, ignore the rest.
    IgnoredOnly,

    /// Honor the marker on each method.
    #[default]
    Default,
}

impl TestIgnore for IgnorePolicy {
    fn ignore(&self, method: &TestMethod) -> IgnoreStatus {
        match (self, &method.ignore) {
            (IgnorePolicy::IgnoredOnly, IgnoreStatus::Run) => IgnoreStatus::Ignore,
            (IgnorePolicy::IncludeIgnored, _)
            | (IgnorePolicy::IgnoredOnly, IgnoreStatus::Ignore)
            | (IgnorePolicy::IgnoredOnly, IgnoreStatus::IgnoreWithReason(_))
            | (IgnorePolicy::Default, IgnoreStatus::Run) => IgnoreStatus::Run,
            (IgnorePolicy::Default, status) => status.clone(),
        }
    }
}
