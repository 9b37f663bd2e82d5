use serde::{Deserialize, Serialize};

use crate::ast::node::{Node, NodeKind};
use crate::foundation::core::Position;

/// Boundary (JSON) form of a predicate tree.
///
/// Operators are carried as strings here; [`build_node`](crate::ast::validate::build_node)
/// turns a definition into a [`Node`] and reports unknown operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDef {
    Literal {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Number {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    String {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Constant {
        value: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Undefined {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Math {
        op: String,
        left: Box<NodeDef>,
        right: Box<NodeDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Compare {
        op: String,
        left: Box<NodeDef>,
        right: Box<NodeDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Logical {
        op: String,
        left: Box<NodeDef>,
        right: Box<NodeDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Negate {
        expr: Box<NodeDef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
}

impl NodeDef {
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Literal { position, .. }
            | Self::Number { position, .. }
            | Self::String { position, .. }
            | Self::Constant { position, .. }
            | Self::Undefined { position }
            | Self::Math { position, .. }
            | Self::Compare { position, .. }
            | Self::Logical { position, .. }
            | Self::Negate { position, .. } => *position,
        }
    }
}

impl Node {
    /// Convert back to the boundary form. Default positions are omitted.
    pub fn to_def(&self) -> NodeDef {
        let position = (self.position != Position::default()).then_some(self.position);
        match &self.kind {
            NodeKind::Literal(name) => NodeDef::Literal {
                name: name.clone(),
                position,
            },
            NodeKind::Number(value) => NodeDef::Number {
                value: *value,
                position,
            },
            NodeKind::Str(value) => NodeDef::String {
                value: value.clone(),
                position,
            },
            NodeKind::Constant(value) => NodeDef::Constant {
                value: *value,
                position,
            },
            NodeKind::Undefined => NodeDef::Undefined { position },
            NodeKind::Math(m) => NodeDef::Math {
                op: m.op.symbol().to_owned(),
                left: Box::new(m.left.to_def()),
                right: Box::new(m.right.to_def()),
                position,
            },
            NodeKind::Compare(c) => NodeDef::Compare {
                op: c.op.symbol().to_owned(),
                left: Box::new(c.left.to_def()),
                right: Box::new(c.right.to_def()),
                position,
            },
            NodeKind::Logical(l) => NodeDef::Logical {
                op: l.op.symbol().to_owned(),
                left: Box::new(l.left.to_def()),
                right: Box::new(l.right.to_def()),
                position,
            },
            NodeKind::Negate(inner) => NodeDef::Negate {
                expr: Box::new(inner.to_def()),
                position,
            },
        }
    }
}
