use std::sync::Arc;

use crate::{
    class::{TestClass, TestMethod},
    description::Description,
    error::{ConfigError, FilterError},
    executor::{DefaultExecutor, MethodExecutor},
    filter::{DescriptionFilter, retain_matching},
    notifier::RunNotifier,
    params::{SubTest, resolve_table, synthesize, validate},
    report::TestOutcomes,
};

/// Runs one method once per row of its parameter table.
///
/// Every row is a test of its own, named after the method and the row values.
/// The runner describes itself as a suite named after the method with one
/// child per row that is still retained.
#[derive(Debug)]
pub struct ParameterizedMethodRunner<E = DefaultExecutor> {
    class_name: String,
    method: Arc<TestMethod>,
    sub_tests: Vec<SubTest>,
    executor: Arc<E>,
}

impl<E> ParameterizedMethodRunner<E> {
    /// Resolve `field` on `class` and expand `method` over it.
    ///
    /// Returns every problem with the table, or just the one that made the
    /// table unreadable.
    pub(crate) fn build(
        class: &TestClass,
        method: &Arc<TestMethod>,
        field: &str,
        executor: Arc<E>,
    ) -> Result<Self, Vec<ConfigError>> {
        let table = resolve_table(class, field).map_err(|err| vec![err])?;
        let table = validate(method, field, table)?;
        Ok(Self {
            class_name: class.name.to_string(),
            method: Arc::clone(method),
            sub_tests: synthesize(&class.name, method, &table),
            executor,
        })
    }

    /// The declared name of the method, without any row values.
    pub fn name(&self) -> &str {
        &self.method.name
    }

    /// The method every row is executed with.
    pub fn method(&self) -> &Arc<TestMethod> {
        &self.method
    }

    /// The rows that are still retained, in table order.
    pub fn children(&self) -> &[SubTest] {
        &self.sub_tests
    }

    /// A suite named after the method with one child per retained row.
    ///
    /// Rebuilt on every call, so it reflects earlier calls to
    /// [`filter`](Self::filter).
    pub fn describe(&self) -> Description {
        Description::suite(self.method.name.as_ref())
            .with_class_name(self.class_name.as_str())
            .with_method_name(self.method.name.as_ref())
            .with_children(self.sub_tests.iter().map(|sub| sub.description().clone()))
    }

    /// Keep only the rows whose description passes `filter`.
    ///
    /// Filtering works on the rows retained so far, so applying filters one
    /// after another narrows further. Returns how many rows were dropped. When
    /// no row is left this fails with [`FilterError::NoTestsRemain`] and the
    /// runner stays usable, it just has nothing to run.
    pub fn filter<F>(&mut self, filter: &F) -> Result<usize, FilterError>
    where
        F: DescriptionFilter + ?Sized,
    {
        let (retained, filtered_out) =
            retain_matching(&self.sub_tests, filter, SubTest::description);
        self.sub_tests = retained;
        match self.sub_tests.is_empty() {
            true => Err(FilterError::NoTestsRemain {
                filter: filter.describe().into_owned(),
            }),
            false => Ok(filtered_out),
        }
    }
}

impl<E: MethodExecutor> ParameterizedMethodRunner<E> {
    /// Execute every retained row in table order.
    ///
    /// A failing row is reported and the next row runs anyway.
    pub fn run(&self, notifier: &mut RunNotifier) -> TestOutcomes {
        self.sub_tests
            .iter()
            .map(|sub| {
                let status = self
                    .executor
                    .execute(sub.method(), sub.args(), sub.description(), notifier);
                (sub.description().clone(), status)
            })
            .collect()
    }
}
