//! Predicate expression tree: node model, JSON boundary form and the static validation pass.

pub(crate) mod def;
pub(crate) mod node;
pub(crate) mod ops;
pub(crate) mod validate;
