// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{NullKind, Value};

use crate::context::EvaluationContext;
use crate::expression::{Expression, UnaryExpression, UnaryOperator};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn unary(&self, expr: &UnaryExpression, ctx: &dyn EvaluationContext) -> Value {
        match expr.op {
            UnaryOperator::Plus => {
                let value = self.evaluate(&expr.expr, ctx);
                match value {
                    Value::Null(_) | Value::Int8(_) | Value::Float8(_) => value,
                    _ => Value::Null(NullKind::BadType),
                }
            }
            UnaryOperator::Negate => self.evaluate(&expr.expr, ctx).neg(),
            UnaryOperator::Not => self.evaluate(&expr.expr, ctx).not(),
            UnaryOperator::Increment => self.step_var(expr, ctx, 1),
            UnaryOperator::Decrement => self.step_var(expr, ctx, -1),
        }
    }

    /// Increment/decrement rebind their variable operand through the
    /// context and return the new value. A non-variable operand is a
    /// programmer error in the planner.
    fn step_var(&self, expr: &UnaryExpression, ctx: &dyn EvaluationContext, delta: i64) -> Value {
        match expr.expr.as_ref() {
            Expression::Variable(var) => {
                let next = ctx.get_var(&var.name).add(&Value::int8(delta));
                ctx.set_var(&var.name, next.clone());
                next
            }
            other => {
                debug_assert!(false, "increment over a non-variable expression: {}", other);
                Value::Null(NullKind::BadType)
            }
        }
    }
}
