// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::Value;

use crate::context::EvaluationContext;
use crate::expression::{AddExpression, DivExpression, MulExpression, RemExpression, SubExpression};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn add(&self, expr: &AddExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.add(&right)
    }

    pub(crate) fn sub(&self, expr: &SubExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.sub(&right)
    }

    pub(crate) fn mul(&self, expr: &MulExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.mul(&right)
    }

    pub(crate) fn div(&self, expr: &DivExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.div(&right)
    }

    pub(crate) fn rem(&self, expr: &RemExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.rem(&right)
    }
}
