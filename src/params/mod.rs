//! Turning a parameter binding into named sub-tests.
//!
//! The pipeline is strictly one way:
//!
//! 1. [`resolve_table`] reads the bound static field into a [`ParameterTable`]
//! 2. [`validate`] checks the table against the method's declared parameters
//!    and yields a [`ValidatedTable`], or every violation it found
//! 3. [`synthesize`] expands a validated table into one [`SubTest`] per row
//!
//! Only a [`ValidatedTable`] can be expanded, so a method with a broken
//! table never produces a single sub-test.

mod table;
pub use table::*;

mod validate;
pub use validate::*;

mod subtest;
pub use subtest::*;
