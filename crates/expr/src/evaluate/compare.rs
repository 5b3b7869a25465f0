// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use lattica_type::{NullKind, Value};
use regex::Regex;
use tracing::debug;

use crate::context::EvaluationContext;
use crate::expression::{
    ContainsExpression, EndsWithExpression, EqualExpression, GreaterThanEqualExpression,
    GreaterThanExpression, InExpression, LessThanEqualExpression, LessThanExpression,
    NotEqualExpression, RegexExpression, StartsWithExpression,
};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn equal(&self, expr: &EqualExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.equals(&right)
    }

    pub(crate) fn not_equal(&self, expr: &NotEqualExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        left.not_equals(&right)
    }

    pub(crate) fn less_than(&self, expr: &LessThanExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        ordered(&left, &right, |o| o == Ordering::Less)
    }

    pub(crate) fn less_than_equal(
        &self,
        expr: &LessThanEqualExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        ordered(&left, &right, |o| o != Ordering::Greater)
    }

    pub(crate) fn greater_than(
        &self,
        expr: &GreaterThanExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        ordered(&left, &right, |o| o == Ordering::Greater)
    }

    pub(crate) fn greater_than_equal(
        &self,
        expr: &GreaterThanEqualExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        ordered(&left, &right, |o| o != Ordering::Less)
    }

    pub(crate) fn is_in(&self, expr: &InExpression, ctx: &dyn EvaluationContext) -> Value {
        let value = self.evaluate(&expr.value, ctx);
        let collection = self.evaluate(&expr.collection, ctx);
        negate_if(value.is_in(&collection), expr.negated)
    }

    pub(crate) fn contains(&self, expr: &ContainsExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        negate_if(left.contains(&right), expr.negated)
    }

    pub(crate) fn starts_with(
        &self,
        expr: &StartsWithExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        negate_if(left.starts_with(&right), expr.negated)
    }

    pub(crate) fn ends_with(&self, expr: &EndsWithExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        negate_if(left.ends_with(&right), expr.negated)
    }

    pub(crate) fn regex(&self, expr: &RegexExpression, ctx: &dyn EvaluationContext) -> Value {
        let left = self.evaluate(&expr.left, ctx);
        let right = self.evaluate(&expr.right, ctx);
        match (&left, &right) {
            (Value::Null(kind), _) | (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Utf8(text), Value::Utf8(pattern)) => {
                // `=~` is a full match, not a substring search.
                match Regex::new(&format!("^(?:{})$", pattern)) {
                    Ok(re) => Value::Boolean(re.is_match(text)),
                    Err(err) => {
                        debug!(pattern = %pattern, %err, "invalid regex pattern");
                        Value::Null(NullKind::BadData)
                    }
                }
            }
            _ => Value::Null(NullKind::BadType),
        }
    }
}

fn ordered(left: &Value, right: &Value, pick: impl Fn(Ordering) -> bool) -> Value {
    match left.query_compare(right) {
        Ok(ordering) => Value::Boolean(pick(ordering)),
        Err(null) => null,
    }
}

fn negate_if(value: Value, negated: bool) -> Value {
    if negated { value.not() } else { value }
}
