/// Convenience result type used across the rewrite engine.
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RewriteError {
    /// The static validation pass rejected the tree (unknown operator, malformed node).
    #[error("validation error: {0}")]
    Validation(String),

    /// A non-numeric operand reached arithmetic evaluation.
    #[error("not a number: {value} of type {type_name} is not a Number")]
    NotANumber {
        /// Rendering of the offending value.
        value: String,
        /// Observed type name of the offending value.
        type_name: &'static str,
    },

    /// Errors while evaluating a tree against a context.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Arithmetic that has no defined result (division by zero).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A rewrite entry point was called with inputs it can never accept.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Errors when serializing or deserializing boundary data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RewriteError {
    /// Build a [`RewriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RewriteError::NotANumber`] value.
    pub fn not_a_number(value: impl Into<String>, type_name: &'static str) -> Self {
        Self::NotANumber {
            value: value.into(),
            type_name,
        }
    }

    /// Build a [`RewriteError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RewriteError::Arithmetic`] value.
    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::Arithmetic(msg.into())
    }

    /// Build a [`RewriteError::InvariantViolation`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Build a [`RewriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RewriteError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
