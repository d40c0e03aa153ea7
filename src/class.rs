//! The class under test.
//!
//! A [`TestClass`] is the read-only snapshot a runner is built from: the
//! declared fields that can serve as parameter tables and the ordered list of
//! test methods. Nothing here is looked up lazily, the class is complete once
//! built and runners never mutate it.

use std::{borrow::Cow, panic::RefUnwindSafe, sync::Arc, time::Duration};

use crate::{
    ignore::IgnoreStatus,
    panic::PanicExpectation,
    test::{MethodFnHandle, TestResult},
    value::{ParamType, ParamValue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// The value a field holds at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Rows of boxed values, the only shape usable as a parameter table.
    Table(Vec<Vec<ParamValue>>),

    /// Rows of unboxed primitives.
    Primitive(PrimitiveTable),

    /// Anything that is not a table at all.
    Scalar(ParamValue),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveTable {
    Bool(Vec<Vec<bool>>),
    Int(Vec<Vec<i64>>),
    Float(Vec<Vec<f64>>),
}

impl From<Vec<Vec<ParamValue>>> for FieldValue {
    fn from(value: Vec<Vec<ParamValue>>) -> Self {
        FieldValue::Table(value)
    }
}

impl From<PrimitiveTable> for FieldValue {
    fn from(value: PrimitiveTable) -> Self {
        FieldValue::Primitive(value)
    }
}

impl From<ParamValue> for FieldValue {
    fn from(value: ParamValue) -> Self {
        FieldValue::Scalar(value)
    }
}

/// A declared field of a test class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: Cow<'static, str>,
    pub visibility: Visibility,
    pub is_static: bool,

    /// Whether the field may be read even though it is not public.
    pub force_access: bool,

    pub value: FieldValue,
}

impl FieldDecl {
    /// A public static field.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: true,
            force_access: true,
            value: value.into(),
        }
    }

    pub fn private(self) -> Self {
        Self {
            visibility: Visibility::Private,
            ..self
        }
    }

    pub fn instance(self) -> Self {
        Self {
            is_static: false,
            ..self
        }
    }

    /// Deny forced access, non-public reads will fail.
    pub fn locked(self) -> Self {
        Self {
            force_access: false,
            ..self
        }
    }

    pub fn is_readable(&self) -> bool {
        self.visibility == Visibility::Public || self.force_access
    }
}

/// Binds a method's arguments to the static field named `field`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterBinding {
    pub field: Cow<'static, str>,
}

/// A candidate test method together with its declared shape.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct TestMethod {
    function: MethodFnHandle,
    pub name: Cow<'static, str>,
    pub params: Vec<ParamType>,
    pub visibility: Visibility,
    pub binding: Option<ParameterBinding>,
    pub ignore: IgnoreStatus,
    pub should_panic: PanicExpectation,
    pub timeout: Option<Duration>,
}

impl TestMethod {
    pub fn new<F, T>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&[ParamValue]) -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        Self {
            function: MethodFnHandle::from_boxed(body),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare the parameter types of this method.
    pub fn params(self, params: impl IntoIterator<Item = ParamType>) -> Self {
        Self {
            params: params.into_iter().collect(),
            ..self
        }
    }

    /// Pull the arguments of this method from the static field `field`.
    pub fn with_parameters(self, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            binding: Some(ParameterBinding {
                field: field.into(),
            }),
            ..self
        }
    }

    pub fn ignore(self, ignore: impl Into<IgnoreStatus>) -> Self {
        Self {
            ignore: ignore.into(),
            ..self
        }
    }

    pub fn should_panic(self, should_panic: impl Into<PanicExpectation>) -> Self {
        Self {
            should_panic: should_panic.into(),
            ..self
        }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn private(self) -> Self {
        Self {
            visibility: Visibility::Private,
            ..self
        }
    }

    pub(crate) fn call(&self, args: &[ParamValue]) -> TestResult {
        self.function.call(args)
    }
}

/// A class under test: its name, declared fields and test methods in
/// declaration order.
#[derive(Debug, Default)]
pub struct TestClass {
    pub name: Cow<'static, str>,
    fields: Vec<FieldDecl>,
    methods: Vec<Arc<TestMethod>>,
}

impl TestClass {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: TestMethod) -> Self {
        self.methods.push(Arc::new(method));
        self
    }

    pub fn methods(&self) -> &[Arc<TestMethod>] {
        &self.methods
    }

    /// Look up a declared field by name, regardless of its visibility.
    pub fn lookup_field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }
}
