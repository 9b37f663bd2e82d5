//! Term rewriting for predicate expression trees.
//!
//! The crate evaluates arithmetic nodes against a value context and rewrites comparison
//! sub-expressions using what is known about their operators:
//!
//! - [`canonicalize`] puts every comparison into a canonical operand order so equivalent
//!   comparisons are structurally equal.
//! - [`select_rewrite_expression`] picks the anchor comparison among several candidates.
//! - [`compare_rewrite`] assumes the anchor's outcome and folds the comparisons that follow
//!   from it into constants.
//!
//! Trees enter through [`NodeDef`] (JSON) and the [`build_node`] validation pass, or are built
//! directly with the [`Node`] constructors.
#![forbid(unsafe_code)]

mod ast;
mod eval;
mod foundation;
mod rewrite;

pub use crate::ast::def::NodeDef;
pub use crate::ast::node::{
    CompareOperator, LogicalOperator, MathOperator, Node, NodeKind, Side,
};
pub use crate::ast::ops::{CompareClass, CompareOp, LogicalOp, MathOp};
pub use crate::ast::validate::{
    TreePathElem, ValidationError, ValidationErrors, build_node, parse_tree_json,
};
pub use crate::eval::context::Context;
pub use crate::foundation::core::{Position, Value};
pub use crate::foundation::error::{RewriteError, RewriteResult};
pub use crate::rewrite::canonicalize::{canonicalize, canonicalize_with};
pub use crate::rewrite::opts::{CanonicalizeOpts, OrderInference, RewriteOpts};
pub use crate::rewrite::propagate::{compare_rewrite, compare_rewrite_with};
pub use crate::rewrite::select::{collect_candidates, select_rewrite_expression};
pub use crate::rewrite::signature::{ExprKey, ExprSignature, Orientation};
pub use crate::rewrite::tile::{NodeTag, Pattern, tile, walk};
