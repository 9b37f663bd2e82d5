//! Assumption propagation: once one comparison is assumed to hold (or not), rewrite the
//! comparisons whose outcome follows from it into constants.
//!
//! Equality comparisons are decided by value: knowing `a = 5` decides every `a = x` and
//! `a != x`; knowing `a != 5` only decides comparisons against `5` itself. Order comparisons
//! are decided by identity by default, or through the implication table of the anchor
//! operator when [`OrderInference::Implication`] is selected.

use crate::ast::node::{CompareOperator, Node};
use crate::ast::ops::{CompareClass, CompareOp};
use crate::foundation::error::{RewriteError, RewriteResult};
use crate::rewrite::opts::{OrderInference, RewriteOpts};
use crate::rewrite::signature::{ExprKey, ExprSignature, Orientation};
use crate::rewrite::tile::{NodeTag, Pattern, tile};

/// Rewrite `tree` assuming `anchor` evaluates to `assumed`, with default options.
pub fn compare_rewrite(
    tree: Node,
    signature: &ExprSignature,
    anchor: &CompareOperator,
    assumed: bool,
) -> RewriteResult<Node> {
    compare_rewrite_with(tree, signature, anchor, assumed, &RewriteOpts::default())
}

#[tracing::instrument(skip(tree, anchor, opts), fields(anchor_op = %anchor.op))]
pub fn compare_rewrite_with(
    tree: Node,
    signature: &ExprSignature,
    anchor: &CompareOperator,
    assumed: bool,
    opts: &RewriteOpts,
) -> RewriteResult<Node> {
    if anchor.op.class() != signature.class {
        return Err(RewriteError::invariant(format!(
            "anchor operator {} does not belong to the {:?} class",
            anchor.op, signature.class
        )));
    }

    match signature.class {
        CompareClass::Equality => equality_rewrite(tree, anchor, assumed),
        CompareClass::Order => Ok(order_rewrite(
            tree,
            anchor,
            assumed,
            opts.order_inference,
        )),
    }
}

fn equality_rewrite(mut tree: Node, anchor: &CompareOperator, assumed: bool) -> RewriteResult<Node> {
    let literal = anchor.left.named().ok_or_else(|| {
        RewriteError::invariant(format!(
            "equality anchor needs a named operand on the left, got {}",
            anchor.left
        ))
    })?;
    let static_value = anchor.right.static_value().ok_or_else(|| {
        RewriteError::invariant(format!(
            "equality anchor needs a static value on the right, got {}",
            anchor.right
        ))
    })?;

    // Whether the value of `literal` is pinned to `static_value`.
    let known = anchor.op.is_affirmative() == assumed;

    let pattern = Pattern::KindWithLeft(NodeTag::Compare, NodeTag::Literal);
    let replaced = tile(&mut tree, &[pattern], |_, node| {
        let c = node.as_compare()?;
        if c.op.class() != CompareClass::Equality || c.left.named() != Some(literal) {
            return None;
        }
        let static_match = c.right.static_value()?.static_cmp(&static_value).is_eq();

        let result = if known {
            static_match == c.op.is_affirmative()
        } else if static_match {
            !c.op.is_affirmative()
        } else {
            // Only known to differ from one value; says nothing about this one.
            return None;
        };
        tracing::trace!(node = %node.describe(), result, "decided by equality assumption");
        Some(Node::constant(result))
    });

    tracing::debug!(replaced, known, "equality propagation done");
    Ok(tree)
}

fn order_rewrite(
    mut tree: Node,
    anchor: &CompareOperator,
    assumed: bool,
    inference: OrderInference,
) -> Node {
    let key = ExprKey::of(anchor);
    let replaced = match inference {
        OrderInference::Identity => {
            tile(&mut tree, &[Pattern::Expr(key)], |_, _| {
                Some(Node::constant(assumed))
            })
        }
        OrderInference::Implication => {
            tile(&mut tree, &[Pattern::Kind(NodeTag::Compare)], |_, node| {
                let c = node.as_compare()?;
                if c.op.class() != CompareClass::Order {
                    return None;
                }
                let op = match key.orientation(c)? {
                    Orientation::Same => c.op,
                    Orientation::Swapped => c.op.mirrored(),
                };
                implied(key.op, assumed, op).map(Node::constant)
            })
        }
    };

    tracing::debug!(replaced, ?inference, "order propagation done");
    tree
}

/// Truth of `x candidate y` given that `x anchor y` is `assumed`, when it follows.
///
/// A false order comparison does not imply its complement (undefined or mismatched operands
/// make both sides false), so an assumed-false anchor only decides itself.
fn implied(anchor: CompareOp, assumed: bool, candidate: CompareOp) -> Option<bool> {
    use CompareOp::{Ge, Gt, Le, Lt};

    if candidate == anchor {
        return Some(assumed);
    }
    if !assumed {
        return None;
    }
    match (anchor, candidate) {
        (Gt, Ge) | (Lt, Le) => Some(true),
        (Gt, Lt | Le) | (Ge, Lt) | (Lt, Gt | Ge) | (Le, Gt) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/propagate.rs"]
mod tests;
