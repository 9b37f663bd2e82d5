//! Visit-and-optionally-replace traversal shared by every rewrite.
//!
//! The walk is pre-order and single pass: a node that matches a pattern is handed to the
//! callback first; if the callback returns a replacement the replacement is installed and its
//! subtree is not visited, otherwise the (possibly mutated) node's children are visited next.
//! Running the same rewrite twice therefore sees exactly the output of the first run.

use crate::ast::node::{CompareOperator, LogicalOperator, MathOperator, Node, NodeKind};
use crate::foundation::core::Position;
use crate::rewrite::signature::ExprKey;

/// Node variant tag used by [`Pattern`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Literal,
    Number,
    Str,
    Constant,
    Undefined,
    Math,
    Compare,
    Logical,
    Negate,
}

impl Node {
    pub fn tag(&self) -> NodeTag {
        match self.kind {
            NodeKind::Literal(_) => NodeTag::Literal,
            NodeKind::Number(_) => NodeTag::Number,
            NodeKind::Str(_) => NodeTag::Str,
            NodeKind::Constant(_) => NodeTag::Constant,
            NodeKind::Undefined => NodeTag::Undefined,
            NodeKind::Math(_) => NodeTag::Math,
            NodeKind::Compare(_) => NodeTag::Compare,
            NodeKind::Logical(_) => NodeTag::Logical,
            NodeKind::Negate(_) => NodeTag::Negate,
        }
    }

    fn left_child(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::Math(MathOperator { left, .. })
            | NodeKind::Compare(CompareOperator { left, .. })
            | NodeKind::Logical(LogicalOperator { left, .. }) => Some(&**left),
            NodeKind::Negate(inner) => Some(&**inner),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Any node of the given variant.
    Kind(NodeTag),
    /// A node of the first variant whose left (or only) child is of the second variant.
    KindWithLeft(NodeTag, NodeTag),
    /// A comparison structurally equal to the key.
    Expr(ExprKey),
}

impl Pattern {
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Kind(tag) => node.tag() == *tag,
            Self::KindWithLeft(tag, left) => {
                node.tag() == *tag && node.left_child().is_some_and(|l| l.tag() == *left)
            }
            Self::Expr(key) => node.as_compare().is_some_and(|c| key.matches(c)),
        }
    }
}

/// Walk `root`, offering each node matched by one of `patterns` to `replace`.
///
/// The first matching pattern is passed along with the node. Returns the number of nodes
/// that were replaced. A replacement without a position inherits the replaced node's one.
pub fn tile<F>(root: &mut Node, patterns: &[Pattern], mut replace: F) -> usize
where
    F: FnMut(&Pattern, &mut Node) -> Option<Node>,
{
    let mut replaced = 0;
    visit(root, patterns, &mut replace, &mut replaced);
    replaced
}

fn visit<F>(node: &mut Node, patterns: &[Pattern], replace: &mut F, replaced: &mut usize)
where
    F: FnMut(&Pattern, &mut Node) -> Option<Node>,
{
    if let Some(pattern) = patterns.iter().find(|p| p.matches(node))
        && let Some(mut new) = replace(pattern, node)
    {
        if new.position == Position::default() {
            new.position = node.position;
        }
        *node = new;
        *replaced += 1;
        return;
    }

    match &mut node.kind {
        NodeKind::Math(MathOperator { left, right, .. })
        | NodeKind::Compare(CompareOperator { left, right, .. })
        | NodeKind::Logical(LogicalOperator { left, right, .. }) => {
            visit(left, patterns, replace, replaced);
            visit(right, patterns, replace, replaced);
        }
        NodeKind::Negate(inner) => visit(inner, patterns, replace, replaced),
        NodeKind::Literal(_)
        | NodeKind::Number(_)
        | NodeKind::Str(_)
        | NodeKind::Constant(_)
        | NodeKind::Undefined => {}
    }
}

/// Read-only pre-order walk.
pub fn walk<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    f(node);
    match &node.kind {
        NodeKind::Math(MathOperator { left, right, .. })
        | NodeKind::Compare(CompareOperator { left, right, .. })
        | NodeKind::Logical(LogicalOperator { left, right, .. }) => {
            walk(left, f);
            walk(right, f);
        }
        NodeKind::Negate(inner) => walk(inner, f),
        _ => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/tile.rs"]
mod tests;
