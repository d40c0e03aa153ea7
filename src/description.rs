//! Descriptions identify runnable units for reporting and filtering.
//!
//! A description is a small tree. Leaves are single tests (a plain method or
//! one row of a parameterized method), suites group them (a parameterized
//! method's rows, or a whole class). Runners rebuild descriptions from their
//! current children on every call, so a description always reflects what a
//! filter left behind.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionKind {
    Suite,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description {
    kind: DescriptionKind,
    display_name: String,
    class_name: Option<String>,
    method_name: Option<String>,
    children: Vec<Description>,
}

impl Description {
    /// A suite named `name` without children.
    pub fn suite(name: impl Into<String>) -> Self {
        Self {
            kind: DescriptionKind::Suite,
            display_name: name.into(),
            class_name: None,
            method_name: None,
            children: Vec::new(),
        }
    }

    /// A single test of `class_name`.
    ///
    /// `method_name` is the declared method, `display_name` what gets
    /// reported. They differ for parameter rows.
    pub fn test(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: DescriptionKind::Test,
            display_name: display_name.into(),
            class_name: Some(class_name.into()),
            method_name: Some(method_name.into()),
            children: Vec::new(),
        }
    }

    pub fn with_method_name(self, method_name: impl Into<String>) -> Self {
        Self {
            method_name: Some(method_name.into()),
            ..self
        }
    }

    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..self
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Description>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_suite(&self) -> bool {
        self.kind == DescriptionKind::Suite
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    pub fn children(&self) -> &[Description] {
        &self.children
    }

    /// Number of leaves below (or at) this node.
    pub fn test_count(&self) -> usize {
        match self.kind {
            DescriptionKind::Test => 1,
            DescriptionKind::Suite => self.children.iter().map(Description::test_count).sum(),
        }
    }

    /// All leaves in order, depth first.
    pub fn leaves(&self) -> Vec<&Description> {
        match self.kind {
            DescriptionKind::Test => vec![self],
            DescriptionKind::Suite => self.children.iter().flat_map(Description::leaves).collect(),
        }
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.class_name) {
            (DescriptionKind::Test, Some(class_name)) => {
                write!(f, "{}({class_name})", self.display_name)
            }
            _ => f.write_str(&self.display_name),
        }
    }
}
