use crate::ast::node::{CompareOperator, LogicalOperator, MathOperator, Node, NodeKind};
use crate::ast::ops::{CompareOp, LogicalOp};
use crate::eval::context::Context;
use crate::foundation::core::Value;
use crate::foundation::error::RewriteResult;

impl Node {
    /// Evaluate this subtree against `ctx`.
    pub fn eval(&self, ctx: &Context) -> RewriteResult<Value> {
        match &self.kind {
            NodeKind::Literal(name) => Ok(ctx.lookup(name)),
            NodeKind::Number(v) => Ok(Value::Number(*v)),
            NodeKind::Str(v) => Ok(Value::Str(v.clone())),
            NodeKind::Constant(v) => Ok(Value::Bool(*v)),
            NodeKind::Undefined => Ok(Value::Undefined),
            NodeKind::Math(m) => m.eval(ctx).map(Value::Number),
            NodeKind::Compare(c) => c.eval(ctx).map(Value::Bool),
            NodeKind::Logical(l) => l.eval(ctx).map(Value::Bool),
            NodeKind::Negate(inner) => Ok(Value::Bool(!inner.eval(ctx)?.truthy())),
        }
    }
}

impl MathOperator {
    /// Evaluate both operands and apply the operator.
    ///
    /// Undefined operands count as `0`; anything else that is not a number is rejected.
    pub fn eval(&self, ctx: &Context) -> RewriteResult<f64> {
        let left = zero_if_undefined(self.left.eval(ctx)?).as_number()?;
        let right = zero_if_undefined(self.right.eval(ctx)?).as_number()?;
        self.op.apply(left, right)
    }
}

fn zero_if_undefined(v: Value) -> Value {
    match v {
        Value::Undefined => Value::Number(0.0),
        other => other,
    }
}

impl CompareOperator {
    /// Order comparisons between mismatched or undefined operands are `false`.
    pub fn eval(&self, ctx: &Context) -> RewriteResult<bool> {
        let left = self.left.eval(ctx)?;
        let right = self.right.eval(ctx)?;
        let ord = left.partial_order(&right);
        Ok(match self.op {
            CompareOp::Eq | CompareOp::Is => left == right,
            CompareOp::Ne | CompareOp::IsNot => left != right,
            CompareOp::Lt => ord.is_some_and(|o| o.is_lt()),
            CompareOp::Le => ord.is_some_and(|o| o.is_le()),
            CompareOp::Gt => ord.is_some_and(|o| o.is_gt()),
            CompareOp::Ge => ord.is_some_and(|o| o.is_ge()),
        })
    }
}

impl LogicalOperator {
    pub fn eval(&self, ctx: &Context) -> RewriteResult<bool> {
        let left = self.left.eval(ctx)?.truthy();
        match (self.op, left) {
            (LogicalOp::And, false) => Ok(false),
            (LogicalOp::Or, true) => Ok(true),
            _ => Ok(self.right.eval(ctx)?.truthy()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
