use std::{fmt::Debug, panic::RefUnwindSafe};

use crate::value::ParamValue;

/// The body of a test method.
///
/// Bodies receive the bound argument row, plain methods are called with an
/// empty slice.
pub struct MethodFnHandle(Box<dyn MethodFn + Send + Sync + RefUnwindSafe>);

impl Debug for MethodFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MethodFnHandle(...)")
    }
}

impl Default for MethodFnHandle {
    fn default() -> Self {
        Self::from_boxed(|_: &[ParamValue]| {})
    }
}

impl MethodFnHandle {
    pub fn from_boxed<F, T>(f: F) -> Self
    where
        F: Fn(&[ParamValue]) -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        Self(Box::new(f))
    }

    pub fn call(&self, args: &[ParamValue]) -> TestResult {
        self.0.call_method(args)
    }
}

pub trait MethodFn {
    fn call_method(&self, args: &[ParamValue]) -> TestResult;
}

impl<F, T> MethodFn for F
where
    F: Fn(&[ParamValue]) -> T,
    T: Into<TestResult>,
{
    fn call_method(&self, args: &[ParamValue]) -> TestResult {
        (self)(args).into()
    }
}

/// What a test body returned.
///
/// Bodies may return `()` or any `Result<(), E>` with a debuggable error,
/// panicking is the other way to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult(pub Result<(), String>);

impl From<()> for TestResult {
    fn from(_: ()) -> Self {
        Self(Ok(()))
    }
}

impl<E: Debug> From<Result<(), E>> for TestResult {
    fn from(v: Result<(), E>) -> Self {
        TestResult(v.map_err(|e| format!("{e:#?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_pass_arguments_through() {
        let handle = MethodFnHandle::from_boxed(|args: &[ParamValue]| {
            match args.first().and_then(ParamValue::as_int) {
                Some(1) => Ok(()),
                other => Err(format!("unexpected {other:?}")),
            }
        });

        assert_eq!(handle.call(&[ParamValue::Int(1)]), TestResult(Ok(())));
        assert!(handle.call(&[ParamValue::Int(2)]).0.is_err());
    }

    #[test]
    fn default_handle_passes() {
        assert_eq!(MethodFnHandle::default().call(&[]), TestResult(Ok(())));
    }
}
