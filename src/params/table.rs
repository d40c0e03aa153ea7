use std::sync::Arc;

use crate::{
    class::{FieldValue, TestClass},
    error::ConfigError,
    value::ParamValue,
};

/// The rows of a parameter table, in declaration order.
///
/// Rows are not required to share an arity, mismatches are caught by
/// validation row by row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterTable {
    rows: Vec<Arc<[ParamValue]>>,
}

impl ParameterTable {
    pub fn new(rows: impl IntoIterator<Item = Vec<ParamValue>>) -> Self {
        Self {
            rows: rows.into_iter().map(Arc::from).collect(),
        }
    }

    pub fn rows(&self) -> &[Arc<[ParamValue]>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read the static field `field` of `class` as a parameter table.
///
/// Private fields are read as long as the class allows forcing access.
pub fn resolve_table(class: &TestClass, field: &str) -> Result<ParameterTable, ConfigError> {
    let Some(decl) = class.lookup_field(field) else {
        return Err(ConfigError::FieldNotFound {
            field: field.to_string(),
        });
    };

    if !decl.is_static {
        return Err(ConfigError::FieldNotStatic {
            field: field.to_string(),
        });
    }

    if !decl.is_readable() {
        return Err(ConfigError::FieldAccessDenied {
            field: field.to_string(),
        });
    }

    match &decl.value {
        FieldValue::Table(rows) => Ok(ParameterTable::new(rows.iter().cloned())),
        FieldValue::Primitive(_) | FieldValue::Scalar(_) => {
            Err(ConfigError::UnsupportedElementType {
                field: field.to_string(),
            })
        }
    }
}
