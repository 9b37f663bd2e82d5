use std::fmt;

use crate::ast::def::NodeDef;
use crate::ast::node::{Node, NodeKind};
use crate::ast::ops::{CompareOp, LogicalOp, MathOp};
use crate::foundation::core::Position;
use crate::foundation::error::{RewriteError, RewriteResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreePathElem {
    Left,
    Right,
    Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: Vec<TreePathElem>,
    pub position: Option<Position>,
    pub message: String,
}

impl ValidationError {
    fn at(path: &[TreePathElem], position: Option<Position>, message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_path(&self.path))?;
        if let Some(pos) = self.position {
            write!(f, " ({pos})")?;
        }
        write!(f, ": {}", self.message)
    }
}

fn format_path(path: &[TreePathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        s.push('.');
        s.push_str(match p {
            TreePathElem::Left => "left",
            TreePathElem::Right => "right",
            TreePathElem::Expr => "expr",
        });
    }
    s
}

/// Every problem found by one validation pass, in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for RewriteError {
    fn from(e: ValidationErrors) -> Self {
        Self::validation(e.to_string())
    }
}

/// Static validation pass: lower a boundary definition into a [`Node`] tree.
///
/// Unknown operators do not stop the walk; every one of them is reported.
pub fn build_node(def: &NodeDef) -> Result<Node, ValidationErrors> {
    let mut errors = Vec::new();
    let node = build(def, &mut Vec::new(), &mut errors);
    match node {
        Some(node) if errors.is_empty() => Ok(node),
        _ => Err(ValidationErrors { errors }),
    }
}

/// Deserialize a JSON tree and run the validation pass over it.
pub fn parse_tree_json(src: &str) -> RewriteResult<Node> {
    let def: NodeDef = serde_json::from_str(src)?;
    Ok(build_node(&def)?)
}

fn build(
    def: &NodeDef,
    path: &mut Vec<TreePathElem>,
    errors: &mut Vec<ValidationError>,
) -> Option<Node> {
    let position = def.position();
    let kind = match def {
        NodeDef::Literal { name, .. } => {
            if name.trim().is_empty() {
                errors.push(ValidationError::at(
                    path,
                    position,
                    "literal name must be non-empty",
                ));
                return None;
            }
            NodeKind::Literal(name.clone())
        }
        NodeDef::Number { value, .. } => NodeKind::Number(*value),
        NodeDef::String { value, .. } => NodeKind::Str(value.clone()),
        NodeDef::Constant { value, .. } => NodeKind::Constant(*value),
        NodeDef::Undefined { .. } => NodeKind::Undefined,
        NodeDef::Math {
            op, left, right, ..
        } => {
            let op = lookup_op(op, MathOp::from_symbol, "math", path, position, errors);
            let (left, right) = build_pair(left, right, path, errors);
            return Some(with_pos(Node::math(op?, left?, right?), position));
        }
        NodeDef::Compare {
            op, left, right, ..
        } => {
            let op = lookup_op(op, CompareOp::from_symbol, "compare", path, position, errors);
            let (left, right) = build_pair(left, right, path, errors);
            return Some(with_pos(Node::compare(op?, left?, right?), position));
        }
        NodeDef::Logical {
            op, left, right, ..
        } => {
            let op = lookup_op(op, LogicalOp::from_symbol, "logical", path, position, errors);
            let (left, right) = build_pair(left, right, path, errors);
            return Some(with_pos(Node::logical(op?, left?, right?), position));
        }
        NodeDef::Negate { expr, .. } => {
            path.push(TreePathElem::Expr);
            let inner = build(expr, path, errors);
            path.pop();
            return Some(with_pos(Node::negate(inner?), position));
        }
    };
    Some(with_pos(Node::new(kind), position))
}

fn build_pair(
    left: &NodeDef,
    right: &NodeDef,
    path: &mut Vec<TreePathElem>,
    errors: &mut Vec<ValidationError>,
) -> (Option<Node>, Option<Node>) {
    path.push(TreePathElem::Left);
    let l = build(left, path, errors);
    path.pop();
    path.push(TreePathElem::Right);
    let r = build(right, path, errors);
    path.pop();
    (l, r)
}

fn lookup_op<T>(
    symbol: &str,
    parse: impl FnOnce(&str) -> Option<T>,
    family: &str,
    path: &[TreePathElem],
    position: Option<Position>,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    let op = parse(symbol);
    if op.is_none() {
        errors.push(ValidationError::at(
            path,
            position,
            format!("Unknown {family} operator {symbol}"),
        ));
    }
    op
}

fn with_pos(node: Node, position: Option<Position>) -> Node {
    match position {
        Some(p) => node.with_position(p),
        None => node,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ast/validate.rs"]
mod tests;
