// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::Value;

use crate::context::EvaluationContext;
use crate::expression::CallExpression;

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn call(&self, expr: &CallExpression, ctx: &dyn EvaluationContext) -> Value {
        let args: Vec<Value> =
            expr.args.iter().map(|arg| self.evaluate(arg, ctx)).collect();
        (expr.func().apply)(&args)
    }
}
