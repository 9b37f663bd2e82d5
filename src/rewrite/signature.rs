use crate::ast::node::{CompareOperator, Node, Side};
use crate::ast::ops::{CompareClass, CompareOp};

/// Selection signature of a comparison: its inference class and which operand is static.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExprSignature {
    pub class: CompareClass,
    pub static_side: Option<Side>,
}

impl ExprSignature {
    pub fn new(class: CompareClass, static_side: Option<Side>) -> Self {
        Self { class, static_side }
    }

    /// Signature derived from the operator and the operand shapes of `c`.
    pub fn of(c: &CompareOperator) -> Self {
        Self {
            class: c.op.class(),
            static_side: c.static_side(),
        }
    }
}

/// Identity of a comparison expression: operator plus operand subtrees, compared structurally.
///
/// Two trees built independently (or by different parsers) produce equal keys for the same
/// expression, regardless of node positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprKey {
    pub op: CompareOp,
    pub left: Node,
    pub right: Node,
}

impl ExprKey {
    pub fn of(c: &CompareOperator) -> Self {
        Self {
            op: c.op,
            left: (*c.left).clone(),
            right: (*c.right).clone(),
        }
    }

    pub fn matches(&self, c: &CompareOperator) -> bool {
        self.op == c.op && *c.left == self.left && *c.right == self.right
    }

    /// How `c` relates to this key's operand pair, regardless of operator.
    pub fn orientation(&self, c: &CompareOperator) -> Option<Orientation> {
        if *c.left == self.left && *c.right == self.right {
            Some(Orientation::Same)
        } else if *c.left == self.right && *c.right == self.left {
            Some(Orientation::Swapped)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Same,
    Swapped,
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/signature.rs"]
mod tests;
