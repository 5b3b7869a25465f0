// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::Value;

use crate::context::EvaluationContext;
use crate::expression::{AndExpression, OrExpression, XorExpression};

use super::Evaluator;

// Both operands are always evaluated before combining: a side-effecting
// right operand runs even when the left already decides the result.
impl Evaluator<'_> {
    pub(crate) fn and(&self, expr: &AndExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.and(&right)
    }

    pub(crate) fn or(&self, expr: &OrExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.or(&right)
    }

    pub(crate) fn xor(&self, expr: &XorExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.xor(&right)
    }
}
