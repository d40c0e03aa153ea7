use std::ops::Deref;

use crate::{class::TestMethod, error::ConfigError};

use super::ParameterTable;

/// A [`ParameterTable`] that fits its method's declared parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTable(ParameterTable);

impl Deref for ValidatedTable {
    type Target = ParameterTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Check `table`, read from `field`, against the parameters of `method`.
///
/// Every rule is checked on every row, all violations are returned together
/// in the order they were found.
pub fn validate(
    method: &TestMethod,
    field: &str,
    table: ParameterTable,
) -> Result<ValidatedTable, Vec<ConfigError>> {
    let mut errors = Vec::new();

    if table.is_empty() {
        errors.push(ConfigError::EmptyParameterTable {
            field: field.to_string(),
        });
    }

    let expected = method.params.len();
    if expected == 0 {
        errors.push(ConfigError::NoArgumentsExpected {
            method: method.name.to_string(),
        });
    }

    for row in table.rows() {
        if row.len() != expected {
            errors.push(ConfigError::ArityMismatch {
                method: method.name.to_string(),
                expected,
                actual: row.len(),
            });
            continue;
        }

        errors.extend(
            method
                .params
                .iter()
                .zip(row.iter())
                .filter(|(ty, value)| !ty.accepts(value))
                .map(|(ty, value)| ConfigError::TypeMismatch {
                    value: value.clone(),
                    expected: *ty,
                }),
        );
    }

    match errors.is_empty() {
        true => Ok(ValidatedTable(table)),
        false => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        table,
        value::{ParamType, ParamValue},
    };

    fn method(params: impl IntoIterator<Item = ParamType>) -> TestMethod {
        TestMethod::new("parameterizedTest", |_| ()).params(params)
    }

    fn messages(errors: Vec<ConfigError>) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn accepts_matching_rows() {
        let table = ParameterTable::new(table![
            ["run1param1", "run1param2"],
            ["run2param1", None::<&str>]
        ]);
        let validated = validate(&method([ParamType::Str, ParamType::Str]), "myParams", table);
        assert_eq!(validated.map(|table| table.len()), Ok(2));
    }

    #[test]
    fn empty_table() {
        let errors = validate(&method([ParamType::Str]), "parameters", ParameterTable::default())
            .unwrap_err();
        assert_eq!(
            messages(errors),
            ["Field \"parameters\" was expected to define parameters"]
        );
    }

    #[test]
    fn method_without_parameters() {
        let table = ParameterTable::new(table![["unused"]]);
        let errors = validate(&method([]), "parameters", table).unwrap_err();
        assert_eq!(
            messages(errors),
            [
                "Method \"parameterizedTest\" takes no arguments",
                "Method \"parameterizedTest\" requires 0 parameters, but 1 is defined",
            ]
        );
    }

    #[test]
    fn every_bad_row_is_reported() {
        let table = ParameterTable::new(table![[3], [1, 2], [3, 8, 1]]);
        let errors =
            validate(&method([ParamType::Int, ParamType::Int]), "rows", table).unwrap_err();
        assert_eq!(
            messages(errors),
            [
                "Method \"parameterizedTest\" requires 2 parameters, but 1 is defined",
                "Method \"parameterizedTest\" requires 2 parameters, but 3 are defined",
            ]
        );
    }

    #[test]
    fn type_mismatches_are_collected_across_rows() {
        let table = ParameterTable::new(table![[8.9, 3], ["ok", "three"]]);
        let errors =
            validate(&method([ParamType::Str, ParamType::Int]), "rows", table).unwrap_err();
        assert_eq!(
            errors,
            [
                ConfigError::TypeMismatch {
                    value: ParamValue::Float(8.9),
                    expected: ParamType::Str
                },
                ConfigError::TypeMismatch {
                    value: ParamValue::from("three"),
                    expected: ParamType::Int
                },
            ]
        );
        assert_eq!(errors[0].to_string(), "Parameter <8.9> should be a <str>");
    }

    #[test]
    fn empty_table_and_no_arguments_are_both_reported() {
        let errors = validate(&method([]), "parameters", ParameterTable::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
