// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use lattica_type::{List, Map, NullKind, Set, Value};

use crate::context::EvaluationContext;
use crate::expression::{
    Expression, ListExpression, MapExpression, MapProjectionExpression, SetExpression,
};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn list(&self, expr: &ListExpression, ctx: &dyn EvaluationContext) -> Value {
        let values = expr.items.iter().map(|item| self.evaluate(item, ctx)).collect();
        Value::List(List::new(values))
    }

    pub(crate) fn set(&self, expr: &SetExpression, ctx: &dyn EvaluationContext) -> Value {
        let values = expr.items.iter().map(|item| self.evaluate(item, ctx)).collect();
        Value::Set(Set::new(values))
    }

    pub(crate) fn map(&self, expr: &MapExpression, ctx: &dyn EvaluationContext) -> Value {
        let mut kvs = BTreeMap::new();
        for (key, item) in &expr.items {
            kvs.insert(key.clone(), self.evaluate(item, ctx));
        }
        Value::Map(Map::new(kvs))
    }

    /// Builds the projected map field by field. A `*` property access
    /// expands to every property of the subject, through the
    /// `properties` builtin.
    pub(crate) fn map_projection(
        &self,
        expr: &MapProjectionExpression,
        ctx: &dyn EvaluationContext,
    ) -> Value {
        let subject = self.evaluate(&expr.subject, ctx);
        let mut kvs = BTreeMap::new();
        for field in &expr.fields {
            if is_star_access(&field.value) {
                match self.expand_all_properties(&subject) {
                    Value::Map(map) => kvs.extend(map.kvs),
                    other => {
                        kvs.insert(field.key.clone(), other);
                    }
                }
            } else {
                kvs.insert(field.key.clone(), self.evaluate(&field.value, ctx));
            }
        }
        Value::Map(Map::new(kvs))
    }

    fn expand_all_properties(&self, subject: &Value) -> Value {
        match self.functions().get("properties", 1) {
            Ok(def) => (def.apply)(std::slice::from_ref(subject)),
            Err(_) => {
                debug_assert!(false, "map projection requires the 'properties' builtin");
                Value::Null(NullKind::BadType)
            }
        }
    }
}

fn is_star_access(expr: &Expression) -> bool {
    matches!(expr, Expression::Property(p) if p.prop == "*")
}
