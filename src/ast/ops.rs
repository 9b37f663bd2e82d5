use std::fmt;

use crate::foundation::error::{RewriteError, RewriteResult};

/// Arithmetic operator of a [`MathOperator`](crate::ast::node::MathOperator) node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl MathOp {
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }

    /// Operand order does not affect the result.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    pub fn apply(self, left: f64, right: f64) -> RewriteResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RewriteError::arithmetic(format!(
                        "division by zero: {left} / {right}"
                    )));
                }
                Ok(left / right)
            }
        }
    }
}

impl fmt::Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Inference class shared by a group of comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareClass {
    /// `=`, `!=`, `is`, `is not`.
    Equality,
    /// `<`, `<=`, `>`, `>=`.
    Order,
}

/// Comparison operator of a [`CompareOperator`](crate::ast::node::CompareOperator) node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Is,
    IsNot,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Is,
        Self::IsNot,
        Self::Lt,
        Self::Le,
        Self::Gt,
        Self::Ge,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }

    pub fn class(self) -> CompareClass {
        match self {
            Self::Eq | Self::Ne | Self::Is | Self::IsNot => CompareClass::Equality,
            Self::Lt | Self::Le | Self::Gt | Self::Ge => CompareClass::Order,
        }
    }

    /// `=` and `is`: the comparison holds when the operands match.
    pub fn is_affirmative(self) -> bool {
        matches!(self, Self::Eq | Self::Is)
    }

    /// Operator that gives the same answer with the operands exchanged.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Le => Self::Ge,
            Self::Gt => Self::Lt,
            Self::Ge => Self::Le,
            other => other,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/ops.rs"]
mod tests;
