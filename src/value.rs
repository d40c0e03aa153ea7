//! Parameter values and declared parameter types.
//!
//! A parameter table is heterogeneous: one row may hold a string next to an
//! integer next to `null`. [`ParamValue`] is the tagged value stored in those
//! rows, [`ParamType`] is what a test method declares for each of its
//! parameters. The only compatibility rule between the two is
//! [`ParamType::accepts`], values are never coerced.

use std::{borrow::Cow, fmt::Display};

/// A single value inside a parameter row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    /// The absent value, assignable to every parameter type.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(Cow<'static, str>),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers are widened, so a `Number` parameter can always be read as float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            ParamValue::Char(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v.as_ref()),
            _ => None,
        }
    }
}

/// Values render in their natural form, this is what ends up in sub-test names.
impl Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Null => f.write_str("null"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Char(v) => write!(f, "{v}"),
            ParamValue::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_for_param_value {
    [$($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?] => {$(
        impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::$variant(value $(as $cast)?)
            }
        }
    )*};
}

impl_from_for_param_value![
    bool => Bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Float as f64,
    f64 => Float,
    char => Char,
];

impl From<&'static str> for ParamValue {
    fn from(value: &'static str) -> Self {
        ParamValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(Cow::Owned(value))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

/// The declared type of a test method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamType {
    /// Takes any value.
    #[default]
    Any,
    Bool,
    Int,
    Float,
    /// Takes integers and floats.
    Number,
    Char,
    Str,
}

impl ParamType {
    /// Whether `value` may be bound to a parameter of this type.
    ///
    /// `null` is assignable everywhere.
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (_, ParamValue::Null) | (ParamType::Any, _) => true,
            (ParamType::Bool, ParamValue::Bool(_))
            | (ParamType::Int, ParamValue::Int(_))
            | (ParamType::Float, ParamValue::Float(_))
            | (ParamType::Number, ParamValue::Int(_) | ParamValue::Float(_))
            | (ParamType::Char, ParamValue::Char(_))
            | (ParamType::Str, ParamValue::Str(_)) => true,
            _ => false,
        }
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParamType::Any => "any",
            ParamType::Bool => "bool",
            ParamType::Int => "i64",
            ParamType::Float => "f64",
            ParamType::Number => "number",
            ParamType::Char => "char",
            ParamType::Str => "str",
        })
    }
}

/// Build a parameter table from nested bracket lists.
///
/// Every element goes through `ParamValue::from`, so literals, strings and
/// `Option`s can be mixed freely:
///
/// ```
/// use paramtest::{table, value::ParamValue};
///
/// let rows: Vec<Vec<ParamValue>> = table![["a", 1], ["b", None::<i64>]];
/// assert_eq!(rows[1][1], ParamValue::Null);
/// ```
#[macro_export]
macro_rules! table {
    [$([$($value:expr),* $(,)?]),* $(,)?] => {
        ::std::vec![$(::std::vec![$($crate::value::ParamValue::from($value)),*]),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_naturally() {
        let rendered: Vec<String> = table![["run1", 3, 8.9, 'x', true, None::<i64>]]
            .remove(0)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["run1", "3", "8.9", "x", "true", "null"]);
    }

    #[test]
    fn null_is_assignable_to_everything() {
        for ty in [
            ParamType::Any,
            ParamType::Bool,
            ParamType::Int,
            ParamType::Float,
            ParamType::Number,
            ParamType::Char,
            ParamType::Str,
        ] {
            assert!(ty.accepts(&ParamValue::Null), "{ty} should accept null");
        }
    }

    #[test]
    fn types_reject_other_values() {
        assert!(!ParamType::Str.accepts(&ParamValue::Float(8.9)));
        assert!(!ParamType::Int.accepts(&ParamValue::Float(1.0)));
        assert!(!ParamType::Float.accepts(&ParamValue::Int(1)));
        assert!(ParamType::Number.accepts(&ParamValue::Int(1)));
        assert!(ParamType::Number.accepts(&ParamValue::Float(1.5)));
        assert!(ParamType::Any.accepts(&ParamValue::Char('c')));
    }

    #[test]
    fn accessors_read_matching_variants() {
        assert_eq!(ParamValue::from(2).as_int(), Some(2));
        assert_eq!(ParamValue::from(2).as_float(), Some(2.0));
        assert_eq!(ParamValue::from("two").as_str(), Some("two"));
        assert_eq!(ParamValue::from("two").as_int(), None);
        assert_eq!(ParamValue::from('x').as_char(), Some('x'));
        assert_eq!(ParamValue::from(true).as_bool(), Some(true));
        assert_eq!(ParamValue::from(true).as_char(), None);
        assert!(ParamValue::from(None::<bool>).is_null());
    }
}
