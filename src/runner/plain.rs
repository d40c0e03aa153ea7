use std::sync::Arc;

use crate::{
    class::TestMethod,
    description::Description,
    executor::{DefaultExecutor, MethodExecutor},
    notifier::RunNotifier,
    outcome::TestStatus,
};

/// Runs a method that takes no arguments.
#[derive(Debug)]
pub struct PlainMethodRunner<E = DefaultExecutor> {
    method: Arc<TestMethod>,
    description: Description,
    executor: Arc<E>,
}

impl<E> PlainMethodRunner<E> {
    pub(crate) fn new(class_name: &str, method: Arc<TestMethod>, executor: Arc<E>) -> Self {
        let description = Description::test(class_name, method.name.as_ref(), method.name.as_ref());
        Self {
            method,
            description,
            executor,
        }
    }

    /// The declared name of the method.
    pub fn name(&self) -> &str {
        &self.method.name
    }

    /// The method this runner executes.
    pub fn method(&self) -> &Arc<TestMethod> {
        &self.method
    }

    /// A single test named after the method.
    pub fn describe(&self) -> Description {
        self.description.clone()
    }
}

impl<E: MethodExecutor> PlainMethodRunner<E> {
    /// Execute the method once with no arguments.
    ///
    /// Ignore markers, expected panics and timeouts are left to the executor.
    pub fn run(&self, notifier: &mut RunNotifier) -> TestStatus {
        self.executor
            .execute(&self.method, &[], &self.description, notifier)
    }
}
