use std::cmp::Ordering;
use std::fmt;

use crate::foundation::error::{RewriteError, RewriteResult};

/// Source location of a node, carried for diagnostics only.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Dynamically typed value produced by evaluation or looked up in a context.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Str(String),
    /// No value bound in the context.
    Undefined,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Undefined => "undefined",
        }
    }

    /// Narrow to a number, failing with [`RewriteError::NotANumber`].
    pub fn as_number(&self) -> RewriteResult<f64> {
        match self {
            Self::Number(v) => Ok(*v),
            other => Err(RewriteError::not_a_number(
                other.to_string(),
                other.type_name(),
            )),
        }
    }

    pub fn as_bool(&self) -> RewriteResult<bool> {
        match self {
            Self::Bool(v) => Ok(*v),
            other => Err(RewriteError::evaluation(format!(
                "expected bool, got {other} of type {}",
                other.type_name()
            ))),
        }
    }

    /// Truthiness used by logical operators: zero, empty strings and undefined are false.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(v) => *v,
            Self::Number(v) => *v != 0.0,
            Self::Str(v) => !v.is_empty(),
            Self::Undefined => false,
        }
    }

    /// Total order over static values: booleans, then numbers, then strings.
    ///
    /// `Undefined` sorts last. Numbers use `f64::total_cmp` so NaN has a stable slot.
    pub fn static_cmp(&self, other: &Self) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Bool(_) => 0,
                Value::Number(_) => 1,
                Value::Str(_) => 2,
                Value::Undefined => 3,
            }
        }

        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }

    /// Order comparison used by evaluation. Mixed or undefined operands are unordered.
    pub fn partial_order(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
