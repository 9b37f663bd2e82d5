use crate::ast::node::{CompareOperator, Node};
use crate::ast::ops::CompareClass;
use crate::foundation::core::Value;
use crate::foundation::error::{RewriteError, RewriteResult};
use crate::rewrite::signature::ExprSignature;
use crate::rewrite::tile::walk;

/// Pick the anchor among structurally equivalent comparisons.
///
/// Equality comparisons anchor on the most frequent static value so that the most later
/// comparisons become exact matches; order comparisons anchor on the median so the remaining
/// thresholds split evenly. Ties go to the first candidate in input order.
#[tracing::instrument(skip(candidates), fields(candidates = candidates.len()))]
pub fn select_rewrite_expression<'a>(
    signature: &ExprSignature,
    candidates: &'a [CompareOperator],
) -> RewriteResult<&'a CompareOperator> {
    let Some(side) = signature.static_side else {
        return Err(RewriteError::invariant("no static value found in signature"));
    };
    if candidates.is_empty() {
        return Err(RewriteError::invariant("no candidate expressions to select from"));
    }
    if let Some(c) = candidates.iter().find(|c| c.op.class() != signature.class) {
        return Err(RewriteError::invariant(format!(
            "candidate {c} does not belong to the {:?} class",
            signature.class
        )));
    }

    let values = candidates
        .iter()
        .map(|c| {
            c.operand(side).static_value().ok_or_else(|| {
                RewriteError::invariant(format!(
                    "candidate {} has no static value on the {side:?} side",
                    c.operand(side)
                ))
            })
        })
        .collect::<RewriteResult<Vec<_>>>()?;

    let filter_using = match signature.class {
        CompareClass::Equality => mode(&values),
        CompareClass::Order => median(&values),
    };

    filter_using
        .and_then(|v| {
            candidates
                .iter()
                .zip(&values)
                .find(|(_, cv)| cv.static_cmp(v).is_eq())
        })
        .map(|(c, _)| c)
        .ok_or_else(|| RewriteError::invariant("failed to select expression"))
}

/// Most frequent value; among tied values the one seen first in input order wins.
fn mode(values: &[Value]) -> Option<&Value> {
    let mut counts: Vec<(&Value, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(seen, _)| seen.static_cmp(v).is_eq()) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let mut best: Option<(&Value, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}

/// Middle element in static order; the upper one for even counts so it is always a member.
fn median(values: &[Value]) -> Option<&Value> {
    let mut sorted: Vec<&Value> = values.iter().collect();
    sorted.sort_by(|a, b| a.static_cmp(b));
    sorted.get(sorted.len() / 2).copied()
}

/// Comparisons in `tree` (pre-order) sharing `probe`'s signature and non-static operand.
///
/// This is the candidate set [`select_rewrite_expression`] expects.
pub fn collect_candidates(tree: &Node, probe: &CompareOperator) -> Vec<CompareOperator> {
    let signature = ExprSignature::of(probe);
    let Some(side) = signature.static_side else {
        return Vec::new();
    };
    let operand = probe.operand(side.other());

    let mut out = Vec::new();
    walk(tree, &mut |n: &Node| {
        if let Some(c) = n.as_compare()
            && ExprSignature::of(c) == signature
            && c.operand(side.other()) == operand
        {
            out.push(c.clone());
        }
    });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/select.rs"]
mod tests;
