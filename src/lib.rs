//! Parameterized test methods for class based test suites.
//!
//! A [`TestClass`](class::TestClass) declares fields and test methods. A
//! method bound to a static field with
//! [`with_parameters`](class::TestMethod::with_parameters) runs once per row
//! of that field, every row reported as a test of its own:
//!
//! ```
//! use paramtest::{
//!     class::{FieldDecl, TestClass, TestMethod},
//!     notifier::{RecordingListener, RunNotifier},
//!     runner::ClassRunner,
//!     table,
//!     value::ParamType,
//! };
//!
//! let class = TestClass::new("Params")
//!     .field(FieldDecl::new("someParams", table![["a", 1], ["b", 2]]))
//!     .method(
//!         TestMethod::new("testWithParams", |_| ())
//!             .params([ParamType::Str, ParamType::Int])
//!             .with_parameters("someParams"),
//!     );
//!
//! let runner = ClassRunner::new(&class).unwrap();
//! let names: Vec<_> = runner
//!     .describe()
//!     .leaves()
//!     .iter()
//!     .map(|leaf| leaf.display_name().to_string())
//!     .collect();
//! assert_eq!(names, ["testWithParams a, 1", "testWithParams b, 2"]);
//!
//! let listener = RecordingListener::new();
//! let mut notifier = RunNotifier::new().with_listener(listener.clone());
//! let outcomes = runner.run(&mut notifier);
//! assert!(outcomes.iter().all(|(_, status)| status.passed()));
//! assert_eq!(listener.events().len(), 4);
//! ```
//!
//! Tables are resolved and checked when the runner is built. Use
//! [`harness`] to run a class with filtering and libtest like output.

pub mod class;
pub mod description;
pub mod error;
pub mod executor;
pub mod filter;
pub mod formatter;
pub mod ignore;
pub mod notifier;
pub mod outcome;
pub mod panic;
pub mod params;
pub mod runner;
pub mod test;
pub mod value;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

#[cfg(test)]
mod test_support;
