//! Rewrites over comparison sub-expressions.
//!
//! Typical flow: [`canonicalize`](canonicalize::canonicalize) the tree, gather the comparisons
//! that repeat one shape, let [`select_rewrite_expression`](select::select_rewrite_expression)
//! pick the anchor, then [`compare_rewrite`](propagate::compare_rewrite) under an assumed
//! outcome of that anchor.

pub(crate) mod canonicalize;
pub(crate) mod opts;
pub(crate) mod propagate;
pub(crate) mod select;
pub(crate) mod signature;
pub(crate) mod tile;
