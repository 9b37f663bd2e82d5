use serde::{Deserialize, Serialize};

use crate::foundation::error::RewriteResult;

/// How much an assumed order comparison tells the propagator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderInference {
    /// Only re-occurrences of the anchor expression are replaced.
    #[default]
    Identity,
    /// Comparisons over the same operand pair (either orientation) are decided by the
    /// implication table of the anchor operator.
    Implication,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalizeOpts {
    /// Mirror `<`/`>` (and `<=`/`>=`) when their operands are swapped, so evaluating the
    /// canonical tree gives the same answer as the original one.
    pub mirror_order_operators: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteOpts {
    pub order_inference: OrderInference,
    pub canonicalize: CanonicalizeOpts,
}

impl RewriteOpts {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(src: &str) -> RewriteResult<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rewrite/opts.rs"]
mod tests;
