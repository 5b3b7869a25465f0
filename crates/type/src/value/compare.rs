// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use super::{NullKind, Value};

/// Query-level comparison semantics, distinct from the structural `Ord`:
/// Int and Float compare numerically across kinds, a Null operand makes
/// the result Null, and ordering a non-orderable pairing is
/// `Null(BadType)`.
impl Value {
    /// Equality with null propagation. Mismatched kinds (outside the
    /// numeric pair) are simply not equal.
    pub fn equals(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Null(_), _) | (_, Value::Null(_)) => Value::null(),
            (Value::Int8(l), Value::Float8(r)) => Value::Boolean((*l as f64) == r.value()),
            (Value::Float8(l), Value::Int8(r)) => Value::Boolean(l.value() == (*r as f64)),
            (l, r) if l.get_type() == r.get_type() => Value::Boolean(l == r),
            _ => Value::Boolean(false),
        }
    }

    pub fn not_equals(&self, other: &Value) -> Value {
        match self.equals(other) {
            Value::Boolean(b) => Value::Boolean(!b),
            null => null,
        }
    }

    /// Ordering under query semantics. `Err` carries the Value the
    /// comparison evaluates to instead (a Null subkind).
    pub fn query_compare(&self, other: &Value) -> Result<Ordering, Value> {
        match (self, other) {
            (Value::Null(_), _) | (_, Value::Null(_)) => Err(Value::null()),
            (Value::Int8(l), Value::Int8(r)) => Ok(l.cmp(r)),
            (Value::Int8(l), Value::Float8(r)) => float_cmp(*l as f64, r.value()),
            (Value::Float8(l), Value::Int8(r)) => float_cmp(l.value(), *r as f64),
            (Value::Float8(l), Value::Float8(r)) => Ok(l.cmp(r)),
            (Value::Boolean(l), Value::Boolean(r)) => Ok(l.cmp(r)),
            (Value::Utf8(l), Value::Utf8(r)) => Ok(l.cmp(r)),
            (Value::Date(l), Value::Date(r)) => Ok(l.cmp(r)),
            (Value::Time(l), Value::Time(r)) => Ok(l.cmp(r)),
            (Value::DateTime(l), Value::DateTime(r)) => Ok(l.cmp(r)),
            _ => Err(Value::Null(NullKind::BadType)),
        }
    }

    /// String containment; both operands must be Utf8.
    pub fn contains(&self, other: &Value) -> Value {
        string_pair(self, other, |l, r| l.contains(r))
    }

    pub fn starts_with(&self, other: &Value) -> Value {
        string_pair(self, other, |l, r| l.starts_with(r))
    }

    pub fn ends_with(&self, other: &Value) -> Value {
        string_pair(self, other, |l, r| l.ends_with(r))
    }

    /// Membership of `self` in a List, Set, or the keys of a Map.
    /// Elements match under [`Value::equals`], so `1` is found in
    /// `[1.0]`.
    pub fn is_in(&self, collection: &Value) -> Value {
        match collection {
            Value::Null(_) => Value::null(),
            Value::List(list) => {
                let found = list.iter().any(|v| self.equals(v) == Value::Boolean(true));
                Value::Boolean(found)
            }
            Value::Set(set) => {
                let found = set.iter().any(|v| self.equals(v) == Value::Boolean(true));
                Value::Boolean(found)
            }
            Value::Map(map) => match self {
                Value::Utf8(key) => Value::Boolean(map.contains_key(key)),
                _ => Value::Boolean(false),
            },
            _ => Value::Null(NullKind::BadType),
        }
    }
}

fn float_cmp(l: f64, r: f64) -> Result<Ordering, Value> {
    // Neither side can be NaN: Float8 construction rejects it.
    l.partial_cmp(&r).ok_or(Value::Null(NullKind::NaN))
}

fn string_pair(l: &Value, r: &Value, op: impl Fn(&str, &str) -> bool) -> Value {
    match (l, r) {
        (Value::Null(_), _) | (_, Value::Null(_)) => Value::null(),
        (Value::Utf8(l), Value::Utf8(r)) => Value::Boolean(op(l, r)),
        _ => Value::Null(NullKind::BadType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cross_kind_equality() {
        assert_eq!(Value::int8(1).equals(&Value::float8(1.0)), Value::bool(true));
        assert_eq!(Value::float8(1.5).equals(&Value::int8(1)), Value::bool(false));
    }

    #[test]
    fn test_null_equality_is_null() {
        assert_eq!(Value::null().equals(&Value::int8(1)), Value::null());
        assert_eq!(Value::int8(1).not_equals(&Value::null()), Value::null());
    }

    #[test]
    fn test_mismatched_kinds_are_not_equal() {
        assert_eq!(Value::int8(1).equals(&Value::utf8("1")), Value::bool(false));
        assert_eq!(Value::Empty.equals(&Value::int8(1)), Value::bool(false));
        assert_eq!(Value::Empty.equals(&Value::Empty), Value::bool(true));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Value::int8(1).query_compare(&Value::float8(1.5)), Ok(Ordering::Less));
        assert_eq!(Value::utf8("a").query_compare(&Value::utf8("b")), Ok(Ordering::Less));
        assert_eq!(
            Value::utf8("a").query_compare(&Value::int8(1)),
            Err(Value::Null(NullKind::BadType))
        );
        assert_eq!(Value::int8(1).query_compare(&Value::null()), Err(Value::null()));
    }

    #[test]
    fn test_string_predicates() {
        assert_eq!(Value::utf8("banana").contains(&Value::utf8("ana")), Value::bool(true));
        assert_eq!(Value::utf8("banana").starts_with(&Value::utf8("ba")), Value::bool(true));
        assert_eq!(Value::utf8("banana").ends_with(&Value::utf8("na")), Value::bool(true));
        assert_eq!(Value::utf8("a").contains(&Value::int8(1)), Value::Null(NullKind::BadType));
    }

    #[test]
    fn test_membership() {
        let list = Value::list(vec![Value::int8(1), Value::int8(2), Value::int8(3)]);
        assert_eq!(Value::int8(5).is_in(&list), Value::bool(false));
        assert_eq!(Value::int8(2).is_in(&list), Value::bool(true));
        assert_eq!(Value::float8(2.0).is_in(&list), Value::bool(true));
        assert_eq!(Value::int8(1).is_in(&Value::null()), Value::null());
        assert_eq!(Value::int8(1).is_in(&Value::int8(1)), Value::Null(NullKind::BadType));
    }
}
