// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use super::{NullKind, Value};

/// Null-propagating arithmetic over [`Value`].
///
/// Every operation is total. Promotion: Int⊕Int stays Int (checked, with
/// `Null(Overflow)` past the 64-bit range), any Float operand widens the
/// pair to Float, Utf8 + Utf8 concatenates. A Null operand propagates
/// unchanged, left operand first. Every other pairing is `Null(BadType)`.
impl Value {
    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(kind), _) => Value::Null(*kind),
            (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Int8(l), Value::Int8(r)) => {
                l.checked_add(*r).map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            (Value::Int8(l), Value::Float8(r)) => Value::float8(*l as f64 + r.value()),
            (Value::Float8(l), Value::Int8(r)) => Value::float8(l.value() + *r as f64),
            (Value::Float8(l), Value::Float8(r)) => Value::float8(l.value() + r.value()),
            (Value::Utf8(l), Value::Utf8(r)) => Value::Utf8(format!("{}{}", l, r)),
            _ => Value::Null(NullKind::BadType),
        }
    }

    pub fn sub(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(kind), _) => Value::Null(*kind),
            (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Int8(l), Value::Int8(r)) => {
                l.checked_sub(*r).map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            (Value::Int8(l), Value::Float8(r)) => Value::float8(*l as f64 - r.value()),
            (Value::Float8(l), Value::Int8(r)) => Value::float8(l.value() - *r as f64),
            (Value::Float8(l), Value::Float8(r)) => Value::float8(l.value() - r.value()),
            _ => Value::Null(NullKind::BadType),
        }
    }

    pub fn mul(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(kind), _) => Value::Null(*kind),
            (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Int8(l), Value::Int8(r)) => {
                l.checked_mul(*r).map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            (Value::Int8(l), Value::Float8(r)) => Value::float8(*l as f64 * r.value()),
            (Value::Float8(l), Value::Int8(r)) => Value::float8(l.value() * *r as f64),
            (Value::Float8(l), Value::Float8(r)) => Value::float8(l.value() * r.value()),
            _ => Value::Null(NullKind::BadType),
        }
    }

    pub fn div(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(kind), _) => Value::Null(*kind),
            (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Int8(_), Value::Int8(0)) => Value::Null(NullKind::DivByZero),
            (Value::Int8(l), Value::Int8(r)) => {
                l.checked_div(*r).map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            (l, r) if l.is_numeric() && r.is_numeric() => {
                let divisor = r.as_float().unwrap_or(0.0);
                if divisor == 0.0 {
                    Value::Null(NullKind::DivByZero)
                } else {
                    Value::float8(l.as_float().unwrap_or(0.0) / divisor)
                }
            }
            _ => Value::Null(NullKind::BadType),
        }
    }

    pub fn rem(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(kind), _) => Value::Null(*kind),
            (_, Value::Null(kind)) => Value::Null(*kind),
            (Value::Int8(_), Value::Int8(0)) => Value::Null(NullKind::DivByZero),
            (Value::Int8(l), Value::Int8(r)) => {
                l.checked_rem(*r).map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            (l, r) if l.is_numeric() && r.is_numeric() => {
                let divisor = r.as_float().unwrap_or(0.0);
                if divisor == 0.0 {
                    Value::Null(NullKind::DivByZero)
                } else {
                    Value::float8(l.as_float().unwrap_or(0.0) % divisor)
                }
            }
            _ => Value::Null(NullKind::BadType),
        }
    }

    pub fn neg(&self) -> Value {
        match self {
            Value::Null(kind) => Value::Null(*kind),
            Value::Int8(v) => {
                v.checked_neg().map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
            }
            Value::Float8(v) => Value::float8(-v.value()),
            _ => Value::Null(NullKind::BadType),
        }
    }
}
