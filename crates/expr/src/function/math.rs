// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{NullKind, Value};

use super::{FunctionDef, Functions};

pub fn register(functions: &mut Functions) {
    functions.register(FunctionDef::new("abs", 1, 1, abs));
    functions.register(FunctionDef::new("floor", 1, 1, floor));
    functions.register(FunctionDef::new("ceil", 1, 1, ceil));
    functions.register(FunctionDef::new("round", 1, 1, round));
    functions.register(FunctionDef::new("sqrt", 1, 1, sqrt));
    functions.register(FunctionDef::new("pow", 2, 2, pow));
}

fn abs(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Int8(v) => {
            v.checked_abs().map(Value::Int8).unwrap_or(Value::Null(NullKind::Overflow))
        }
        Value::Float8(v) => Value::float8(v.value().abs()),
        _ => Value::Null(NullKind::BadType),
    }
}

fn floor(args: &[Value]) -> Value {
    unary_float(&args[0], f64::floor)
}

fn ceil(args: &[Value]) -> Value {
    unary_float(&args[0], f64::ceil)
}

fn round(args: &[Value]) -> Value {
    unary_float(&args[0], f64::round)
}

fn sqrt(args: &[Value]) -> Value {
    // A negative radicand surfaces as Null(NaN) through the float8
    // constructor.
    unary_float(&args[0], f64::sqrt)
}

fn pow(args: &[Value]) -> Value {
    match (&args[0], &args[1]) {
        (Value::Null(kind), _) | (_, Value::Null(kind)) => Value::Null(*kind),
        (Value::Int8(base), Value::Int8(exp)) => {
            if *exp < 0 || *exp > u32::MAX as i64 {
                return Value::Null(NullKind::OutOfRange);
            }
            base.checked_pow(*exp as u32)
                .map(Value::Int8)
                .unwrap_or(Value::Null(NullKind::Overflow))
        }
        (l, r) if l.is_numeric() && r.is_numeric() => {
            let base = l.as_float().unwrap_or(0.0);
            let exp = r.as_float().unwrap_or(0.0);
            Value::float8(base.powf(exp))
        }
        _ => Value::Null(NullKind::BadType),
    }
}

fn unary_float(arg: &Value, op: impl Fn(f64) -> f64) -> Value {
    match arg {
        Value::Null(kind) => Value::Null(*kind),
        Value::Int8(v) => Value::float8(op(*v as f64)),
        Value::Float8(v) => Value::float8(op(v.value())),
        _ => Value::Null(NullKind::BadType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(&[Value::float8(-1.1)]), Value::float8(1.1));
        assert_eq!(abs(&[Value::int8(-5)]), Value::int8(5));
        assert_eq!(abs(&[Value::int8(i64::MIN)]), Value::Null(NullKind::Overflow));
        assert_eq!(abs(&[Value::utf8("x")]), Value::Null(NullKind::BadType));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(floor(&[Value::float8(1.7)]), Value::float8(1.0));
        assert_eq!(ceil(&[Value::float8(1.2)]), Value::float8(2.0));
        assert_eq!(round(&[Value::float8(1.5)]), Value::float8(2.0));
    }

    #[test]
    fn test_sqrt_of_negative_is_nan_null() {
        assert_eq!(sqrt(&[Value::float8(-1.0)]), Value::Null(NullKind::NaN));
        assert_eq!(sqrt(&[Value::int8(9)]), Value::float8(3.0));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(&[Value::int8(2), Value::int8(10)]), Value::int8(1024));
        assert_eq!(pow(&[Value::int8(2), Value::int8(-1)]), Value::Null(NullKind::OutOfRange));
        assert_eq!(pow(&[Value::float8(2.0), Value::int8(2)]), Value::float8(4.0));
        assert_eq!(
            pow(&[Value::int8(i64::MAX), Value::int8(2)]),
            Value::Null(NullKind::Overflow)
        );
    }
}
