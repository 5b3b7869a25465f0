// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{NullKind, Value};

use crate::context::EvaluationContext;
use crate::expression::{VariableExpression, VersionedVariableExpression};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn variable(&self, expr: &VariableExpression, ctx: &dyn EvaluationContext) -> Value {
        ctx.get_var(&expr.name)
    }

    pub(crate) fn versioned_variable(
        &self,
        expr: &VersionedVariableExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        match self.evaluate(&expr.version, ctx) {
            Value::Int8(version) => ctx.get_versioned_var(&expr.name, version),
            Value::Null(kind) => Value::Null(kind),
            _ => Value::Null(NullKind::BadType),
        }
    }
}
