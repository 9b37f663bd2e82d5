use std::fmt;

use crate::ast::ops::{CompareOp, LogicalOp, MathOp};
use crate::foundation::core::{Position, Value};
use crate::foundation::error::{RewriteError, RewriteResult};

/// One element of a predicate expression tree.
///
/// A node exclusively owns its children. Equality is structural: `position` is carried for
/// diagnostics and never takes part in comparisons.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Position,
    pub kind: NodeKind,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    /// Named operand resolved against the context at evaluation time.
    Literal(String),
    /// Static numeric value.
    Number(f64),
    /// Static string value.
    Str(String),
    /// Static boolean value, also the result of a propagation rewrite.
    Constant(bool),
    /// Sentinel for "no value bound".
    Undefined,
    Math(MathOperator),
    Compare(CompareOperator),
    Logical(LogicalOperator),
    Negate(Box<Node>),
}

/// Operand slot of a binary node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MathOperator {
    pub op: MathOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompareOperator {
    pub op: CompareOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogicalOperator {
    pub op: LogicalOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Numbers compare bitwise through `f64::total_cmp`, so a `NaN` leaf equals itself and `0`
/// differs from `-0`, matching [`Value::static_cmp`].
impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b).is_eq(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Constant(a), Self::Constant(b)) => a == b,
            (Self::Undefined, Self::Undefined) => true,
            (Self::Math(a), Self::Math(b)) => a == b,
            (Self::Compare(a), Self::Compare(b)) => a == b,
            (Self::Logical(a), Self::Logical(b)) => a == b,
            (Self::Negate(a), Self::Negate(b)) => a == b,
            _ => false,
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            position: Position::default(),
            kind,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn literal(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal(name.into()))
    }

    pub fn number(v: f64) -> Self {
        Self::new(NodeKind::Number(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::new(NodeKind::Str(v.into()))
    }

    pub fn constant(v: bool) -> Self {
        Self::new(NodeKind::Constant(v))
    }

    pub fn undefined() -> Self {
        Self::new(NodeKind::Undefined)
    }

    pub fn math(op: MathOp, left: Node, right: Node) -> Self {
        Self::new(NodeKind::Math(MathOperator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    pub fn compare(op: CompareOp, left: Node, right: Node) -> Self {
        Self::new(NodeKind::Compare(CompareOperator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::logical(LogicalOp::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::logical(LogicalOp::Or, left, right)
    }

    pub fn logical(op: LogicalOp, left: Node, right: Node) -> Self {
        Self::new(NodeKind::Logical(LogicalOperator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    pub fn negate(inner: Node) -> Self {
        Self::new(NodeKind::Negate(Box::new(inner)))
    }

    /// Named operand identity, if this node is a [`NodeKind::Literal`].
    pub fn named(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Literal(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_named(&self) -> bool {
        self.named().is_some()
    }

    /// Value known at rewrite time, if this node is a static leaf.
    pub fn static_value(&self) -> Option<Value> {
        match &self.kind {
            NodeKind::Number(v) => Some(Value::Number(*v)),
            NodeKind::Str(v) => Some(Value::Str(v.clone())),
            NodeKind::Constant(v) => Some(Value::Bool(*v)),
            _ => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Number(_) | NodeKind::Str(_) | NodeKind::Constant(_)
        )
    }

    pub fn as_compare(&self) -> Option<&CompareOperator> {
        match &self.kind {
            NodeKind::Compare(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compare_mut(&mut self) -> Option<&mut CompareOperator> {
        match &mut self.kind {
            NodeKind::Compare(c) => Some(c),
            _ => None,
        }
    }

    /// Short human-readable label used in diagnostics.
    pub fn describe(&self) -> String {
        let what = match &self.kind {
            NodeKind::Literal(name) => format!("literal {name}"),
            NodeKind::Number(v) => format!("number {v}"),
            NodeKind::Str(v) => format!("string '{v}'"),
            NodeKind::Constant(v) => format!("constant {v}"),
            NodeKind::Undefined => "undefined".to_owned(),
            NodeKind::Math(m) => format!("{} operator", m.op),
            NodeKind::Compare(c) => format!("{} comparison", c.op.symbol().to_uppercase()),
            NodeKind::Logical(l) => format!("{} operator", l.op.symbol().to_uppercase()),
            NodeKind::Negate(_) => "NOT operator".to_owned(),
        };
        format!("{what} at {}", self.position)
    }
}

impl MathOperator {
    /// Exchange the operands without changing the evaluated result.
    ///
    /// Only defined for commutative operators; `-` and `/` would need a different operator (or
    /// a negation/reciprocal node) to keep their value, which this node cannot express.
    pub fn reverse(&mut self) -> RewriteResult<()> {
        if !self.op.is_commutative() {
            return Err(RewriteError::invariant(format!(
                "cannot reverse non-commutative operator {}",
                self.op
            )));
        }
        std::mem::swap(&mut self.left, &mut self.right);
        Ok(())
    }
}

impl CompareOperator {
    /// Exchange the operands. The operator is kept as-is.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    pub fn operand(&self, side: Side) -> &Node {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Which operand is a static value, when exactly one is.
    pub fn static_side(&self) -> Option<Side> {
        match (self.left.is_static(), self.right.is_static()) {
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Literal(name) => f.write_str(name),
            NodeKind::Number(v) => write!(f, "{v}"),
            NodeKind::Str(v) => write!(f, "'{v}'"),
            NodeKind::Constant(v) => write!(f, "{v}"),
            NodeKind::Undefined => f.write_str("undefined"),
            NodeKind::Math(m) => write!(f, "({} {} {})", m.left, m.op, m.right),
            NodeKind::Compare(c) => write!(f, "{c}"),
            NodeKind::Logical(l) => write!(f, "({} {} {})", l.left, l.op, l.right),
            NodeKind::Negate(inner) => write!(f, "not {inner}"),
        }
    }
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/node.rs"]
mod tests;
