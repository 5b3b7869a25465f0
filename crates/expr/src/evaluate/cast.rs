// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{NullKind, Type, Value};

use crate::context::EvaluationContext;
use crate::expression::CastExpression;

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn cast(&self, expr: &CastExpression, ctx: &dyn EvaluationContext) -> Value {
        let value = self.evaluate(&expr.expr, ctx);
        cast_value(value, expr.to)
    }
}

/// Conversions between the scalar kinds. An unparsable string is
/// `Null(BadData)`; a float outside the 64-bit integer range is
/// `Null(OutOfRange)`; a pairing with no conversion is `Null(BadType)`.
pub(crate) fn cast_value(value: Value, to: Type) -> Value {
    if let Value::Null(kind) = value {
        return Value::Null(kind);
    }
    if value.get_type() == to {
        return value;
    }
    match to {
        Type::Boolean => match value {
            Value::Utf8(s) => match s.as_str() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                _ => Value::Null(NullKind::BadData),
            },
            _ => Value::Null(NullKind::BadType),
        },
        Type::Int8 => match value {
            Value::Float8(f) => {
                let truncated = f.value().trunc();
                if truncated >= -(2f64.powi(63)) && truncated < 2f64.powi(63) {
                    Value::Int8(truncated as i64)
                } else {
                    Value::Null(NullKind::OutOfRange)
                }
            }
            Value::Utf8(s) => {
                s.trim().parse::<i64>().map(Value::Int8).unwrap_or(Value::Null(NullKind::BadData))
            }
            _ => Value::Null(NullKind::BadType),
        },
        Type::Float8 => match value {
            Value::Int8(i) => Value::float8(i as f64),
            Value::Utf8(s) => s
                .trim()
                .parse::<f64>()
                .map(Value::float8)
                .unwrap_or(Value::Null(NullKind::BadData)),
            _ => Value::Null(NullKind::BadType),
        },
        Type::Utf8 => match value {
            Value::Boolean(b) => Value::utf8(if b { "true" } else { "false" }),
            Value::Int8(i) => Value::utf8(i.to_string()),
            Value::Float8(f) => Value::utf8(f.to_string()),
            Value::Date(d) => Value::utf8(d.to_string()),
            Value::Time(t) => Value::utf8(t.to_string()),
            Value::DateTime(dt) => Value::utf8(dt.to_string()),
            _ => Value::Null(NullKind::BadType),
        },
        _ => Value::Null(NullKind::BadType),
    }
}
