use crate::value::{ParamType, ParamValue};

/// A defect in how a test class is declared.
///
/// These are found while building a runner and are always collected in full
/// before anything runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Field \"{field}\" not found")]
    FieldNotFound { field: String },

    #[error("Field \"{field}\" must be static")]
    FieldNotStatic { field: String },

    #[error("Could not access field: {field}. Please make it public.")]
    FieldAccessDenied { field: String },

    #[error("Field \"{field}\" must be a table of non primitive values (for now)")]
    UnsupportedElementType { field: String },

    #[error("Field \"{field}\" was expected to define parameters")]
    EmptyParameterTable { field: String },

    #[error("Method \"{method}\" takes no arguments")]
    NoArgumentsExpected { method: String },

    #[error(
        "Method \"{method}\" requires {}, but {} defined",
        counted(.expected, "parameter", "parameters"),
        counted(.actual, "is", "are")
    )]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("Parameter <{value}> should be a <{expected}>")]
    TypeMismatch {
        value: ParamValue,
        expected: ParamType,
    },

    #[error("Method {method} should have no parameters")]
    MethodHasParameters { method: String },

    #[error("Method {method} should be public")]
    MethodNotPublic { method: String },

    #[error("No runnable methods")]
    NoRunnableMethods,
}

fn counted(count: &usize, one: &str, many: &str) -> String {
    match count {
        1 => format!("1 {one}"),
        count => format!("{count} {many}"),
    }
}

/// Every [`ConfigError`] found while building a runner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", joined(.causes))]
pub struct InitializationError {
    causes: Vec<ConfigError>,
}

fn joined(causes: &[ConfigError]) -> String {
    causes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl InitializationError {
    pub fn new(causes: Vec<ConfigError>) -> Self {
        Self { causes }
    }

    pub fn causes(&self) -> &[ConfigError] {
        &self.causes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    #[error("No tests remain after applying {filter}")]
    NoTestsRemain { filter: String },
}
