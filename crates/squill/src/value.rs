//! Literal values and the raw-SQL escape hatch.
//!
//! [`Value`] is the tagged variant carried on the right-hand side of
//! conditions, in INSERT rows, and in UPDATE SET pairs. The quoting layer
//! dispatches on the tag, so no runtime type inspection happens anywhere.

use crate::stmt::{Select, Statement};

/// A value appearing in a statement.
#[derive(Clone, Debug)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean literal, spelled per dialect.
    Bool(bool),
    /// Integer literal, rendered unquoted.
    Int(i64),
    /// Floating-point literal, rendered unquoted.
    Float(f64),
    /// String literal, single-quoted and escaped per dialect.
    Text(String),
    /// Ordered sequence, rendered as a parenthesized list (`IN`, `BETWEEN`).
    List(Vec<Value>),
    /// Raw SQL fragment, passed through verbatim. The caller is responsible
    /// for the safety of its content; the compiler never escapes it.
    Raw(String),
    /// Nested statement, compiled recursively and parenthesized.
    Subquery(Box<Statement>),
}

impl Value {
    /// Wrap a raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Value::Raw(sql.into())
    }

    /// Wrap a statement as a subquery value.
    pub fn subquery(stmt: impl Into<Statement>) -> Self {
        Value::Subquery(Box::new(stmt.into()))
    }

    /// Whether this value renders through the sequence path.
    pub(crate) fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

/// A caller-supplied SQL fragment that must never be escaped.
///
/// Anywhere a column or value is accepted, a `Raw` asserts that its content
/// is already valid SQL. This is the sole sanctioned escape hatch past the
/// quoting layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raw(pub String);

impl Raw {
    /// Wrap a SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Raw(sql.into())
    }
}

impl From<Raw> for Value {
    fn from(raw: Raw) -> Self {
        Value::Raw(raw.0)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Select> for Value {
    fn from(select: Select) -> Self {
        Value::Subquery(Box::new(Statement::Select(select)))
    }
}

impl From<Statement> for Value {
    fn from(stmt: Statement) -> Self {
        Value::Subquery(Box::new(stmt))
    }
}
