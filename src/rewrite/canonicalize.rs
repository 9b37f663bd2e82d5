use crate::ast::node::{CompareOperator, Node};
use crate::rewrite::opts::CanonicalizeOpts;
use crate::rewrite::tile::{NodeTag, Pattern, tile};

/// Rewrite every comparison into canonical operand order.
///
/// `gender is 'Male'` and `'Male' is gender` end up as the same tree. The operator is never
/// changed, so a swapped `<`/`>` reads differently when evaluated directly; use
/// [`canonicalize_with`] and [`CanonicalizeOpts::mirror_order_operators`] when that matters.
#[tracing::instrument(skip(tree))]
pub fn canonicalize(tree: Node) -> Node {
    canonicalize_with(tree, &CanonicalizeOpts::default())
}

#[tracing::instrument(skip(tree))]
pub fn canonicalize_with(mut tree: Node, opts: &CanonicalizeOpts) -> Node {
    let mut swapped = 0usize;
    tile(&mut tree, &[Pattern::Kind(NodeTag::Compare)], |_, node| {
        if let Some(c) = node.as_compare_mut()
            && needs_swap(c)
        {
            c.reverse();
            if opts.mirror_order_operators {
                c.op = c.op.mirrored();
            }
            swapped += 1;
        }
        None
    });
    tracing::debug!(swapped, "canonicalized comparisons");
    tree
}

/// Named operands go left, static values go right, and two static values are ordered
/// ascending. Two operands of the same rank (other than static) keep their order.
fn needs_swap(c: &CompareOperator) -> bool {
    let (l, r) = (rank(&c.left), rank(&c.right));
    if l != r {
        return l > r;
    }
    match (c.left.static_value(), c.right.static_value()) {
        (Some(lv), Some(rv)) => lv.static_cmp(&rv).is_gt(),
        _ => false,
    }
}

fn rank(n: &Node) -> u8 {
    if n.is_named() {
        0
    } else if n.is_static() {
        2
    } else {
        1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/canonicalize.rs"]
mod tests;
