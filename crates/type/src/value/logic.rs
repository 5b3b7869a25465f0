// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use super::{NullKind, Value};

enum Tri {
    True,
    False,
    Null(NullKind),
}

fn tri(value: &Value) -> Result<Tri, Value> {
    match value {
        Value::Boolean(true) => Ok(Tri::True),
        Value::Boolean(false) => Ok(Tri::False),
        Value::Null(kind) => Ok(Tri::Null(*kind)),
        _ => Err(Value::Null(NullKind::BadType)),
    }
}

/// Three-valued logic over Boolean operands. A non-Boolean, non-Null
/// operand makes the whole result `Null(BadType)`; otherwise the Kleene
/// tables apply (false dominates null for AND, true dominates null for
/// OR, XOR with any null is null).
impl Value {
    pub fn and(&self, other: &Value) -> Value {
        let (l, r) = match (tri(self), tri(other)) {
            (Ok(l), Ok(r)) => (l, r),
            (Err(bad), _) | (_, Err(bad)) => return bad,
        };
        match (l, r) {
            (Tri::False, _) | (_, Tri::False) => Value::Boolean(false),
            (Tri::Null(kind), _) | (_, Tri::Null(kind)) => Value::Null(kind),
            _ => Value::Boolean(true),
        }
    }

    pub fn or(&self, other: &Value) -> Value {
        let (l, r) = match (tri(self), tri(other)) {
            (Ok(l), Ok(r)) => (l, r),
            (Err(bad), _) | (_, Err(bad)) => return bad,
        };
        match (l, r) {
            (Tri::True, _) | (_, Tri::True) => Value::Boolean(true),
            (Tri::Null(kind), _) | (_, Tri::Null(kind)) => Value::Null(kind),
            _ => Value::Boolean(false),
        }
    }

    pub fn xor(&self, other: &Value) -> Value {
        let (l, r) = match (tri(self), tri(other)) {
            (Ok(l), Ok(r)) => (l, r),
            (Err(bad), _) | (_, Err(bad)) => return bad,
        };
        match (l, r) {
            (Tri::Null(kind), _) | (_, Tri::Null(kind)) => Value::Null(kind),
            (Tri::True, Tri::True) | (Tri::False, Tri::False) => Value::Boolean(false),
            _ => Value::Boolean(true),
        }
    }

    pub fn not(&self) -> Value {
        match self {
            Value::Boolean(b) => Value::Boolean(!b),
            Value::Null(kind) => Value::Null(*kind),
            _ => Value::Null(NullKind::BadType),
        }
    }
}
