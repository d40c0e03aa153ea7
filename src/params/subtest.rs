use std::sync::Arc;

use crate::{class::TestMethod, description::Description, value::ParamValue};

use super::ValidatedTable;

/// One row of a parameterized method, reported as a test of its own.
#[derive(Debug, Clone)]
pub struct SubTest {
    method: Arc<TestMethod>,
    args: Arc<[ParamValue]>,
    description: Description,
}

impl SubTest {
    pub fn method(&self) -> &Arc<TestMethod> {
        &self.method
    }

    pub fn args(&self) -> &[ParamValue] {
        &self.args
    }

    pub fn name(&self) -> &str {
        self.description.display_name()
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

/// The reported name of `method_name` called with `row`.
///
/// `"<method> <value>, <value>, ..."`, each value in its natural form.
pub fn sub_test_name(method_name: &str, row: &[ParamValue]) -> String {
    let values: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("{method_name} {}", values.join(", "))
}

/// Expand `method` into one [`SubTest`] per row of `table`, in row order.
pub fn synthesize(
    class_name: &str,
    method: &Arc<TestMethod>,
    table: &ValidatedTable,
) -> Vec<SubTest> {
    table
        .rows()
        .iter()
        .map(|row| SubTest {
            method: Arc::clone(method),
            args: Arc::clone(row),
            description: Description::test(
                class_name,
                method.name.as_ref(),
                sub_test_name(&method.name, row),
            ),
        })
        .collect()
}
