use std::sync::Arc;

use crate::{
    class::{TestClass, Visibility},
    description::Description,
    error::{ConfigError, FilterError, InitializationError},
    executor::{DefaultExecutor, MethodExecutor},
    filter::DescriptionFilter,
    notifier::RunNotifier,
    report::TestOutcomes,
    runner::{Child, ParameterizedMethodRunner, PlainMethodRunner},
};

/// Runs every test method of a class, in declaration order.
#[derive(Debug)]
pub struct ClassRunner<E = DefaultExecutor> {
    name: String,
    children: Vec<Child<E>>,
}

impl ClassRunner {
    /// Build a runner for `class` using the [`DefaultExecutor`].
    pub fn new(class: &TestClass) -> Result<Self, InitializationError> {
        Self::build(class, DefaultExecutor::new())
    }
}

impl<E> ClassRunner<E> {
    /// Build a runner for `class` that executes methods with `executor`.
    ///
    /// Every method is checked before this returns: methods must be public,
    /// plain methods must not take arguments and parameterized methods need a
    /// readable table that fits their parameters. All problems across all
    /// methods are collected into one [`InitializationError`].
    pub fn build(class: &TestClass, executor: E) -> Result<Self, InitializationError> {
        let executor = Arc::new(executor);
        let mut errors = Vec::new();
        let mut children = Vec::with_capacity(class.methods().len());

        if class.methods().is_empty() {
            errors.push(ConfigError::NoRunnableMethods);
        }

        for method in class.methods() {
            if method.visibility != Visibility::Public {
                errors.push(ConfigError::MethodNotPublic {
                    method: method.name.to_string(),
                });
            }

            match &method.binding {
                Some(binding) => match ParameterizedMethodRunner::build(
                    class,
                    method,
                    &binding.field,
                    Arc::clone(&executor),
                ) {
                    Ok(runner) => children.push(Child::Parameterized(runner)),
                    Err(causes) => errors.extend(causes),
                },
                None if !method.params.is_empty() => {
                    errors.push(ConfigError::MethodHasParameters {
                        method: method.name.to_string(),
                    })
                }
                None => children.push(Child::Plain(PlainMethodRunner::new(
                    &class.name,
                    Arc::clone(method),
                    Arc::clone(&executor),
                ))),
            }
        }

        if !errors.is_empty() {
            return Err(InitializationError::new(errors));
        }

        Ok(Self {
            name: class.name.to_string(),
            children,
        })
    }

    /// The name of the class this runner was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The retained children, one per method, in declaration order.
    ///
    /// Methods dropped by [`filter`](Self::filter) are no longer listed.
    pub fn children(&self) -> &[Child<E>] {
        &self.children
    }

    /// Mutable access to the children, e.g. to filter a single parameterized
    /// method before running the whole class.
    ///
    /// The slice cannot grow or shrink, a child filtered down to nothing
    /// stays in place and simply runs no rows.
    pub fn children_mut(&mut self) -> &mut [Child<E>] {
        &mut self.children
    }

    /// The description of `child`: a single test for plain methods, a suite
    /// of rows for parameterized ones.
    pub fn describe_child(&self, child: &Child<E>) -> Description {
        child.describe()
    }

    /// A suite named after the class with one child per retained method.
    pub fn describe(&self) -> Description {
        Description::suite(self.name.as_str())
            .with_children(self.children.iter().map(|child| self.describe_child(child)))
    }

    /// Number of tests left to run across all children.
    pub fn test_count(&self) -> usize {
        self.children.iter().map(Child::test_count).sum()
    }

    /// Keep only the children that pass `filter`.
    ///
    /// A method is kept when its description passes. Parameterized methods are
    /// then narrowed row by row and dropped if no row is left. Returns how many
    /// tests were dropped in total, or [`FilterError::NoTestsRemain`] if
    /// nothing is left to run.
    pub fn filter<F>(&mut self, filter: &F) -> Result<usize, FilterError>
    where
        F: DescriptionFilter + ?Sized,
    {
        let mut filtered_out = 0;
        let children = std::mem::take(&mut self.children);
        for child in children {
            let before = child.test_count();
            if !filter.should_run(&self.describe_child(&child)) {
                filtered_out += before;
                continue;
            }

            match child {
                Child::Plain(_) => self.children.push(child),
                Child::Parameterized(mut runner) => match runner.filter(filter) {
                    Ok(dropped) => {
                        filtered_out += dropped;
                        self.children.push(Child::Parameterized(runner));
                    }
                    Err(FilterError::NoTestsRemain { .. }) => filtered_out += before,
                },
            }
        }

        match self.children.is_empty() {
            true => Err(FilterError::NoTestsRemain {
                filter: filter.describe().into_owned(),
            }),
            false => Ok(filtered_out),
        }
    }
}

impl<E: MethodExecutor> ClassRunner<E> {
    /// Run a single child.
    ///
    /// Every test of the child is handed to the executor the runner was built
    /// with, which reports it to `notifier`. Nothing a test does escapes this
    /// call.
    pub fn run_child(&self, child: &Child<E>, notifier: &mut RunNotifier) -> TestOutcomes {
        child.run(notifier)
    }

    /// Run every retained child in order.
    pub fn run(&self, notifier: &mut RunNotifier) -> TestOutcomes {
        self.children
            .iter()
            .flat_map(|child| self.run_child(child, notifier))
            .collect()
    }
}
