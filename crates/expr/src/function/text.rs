// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{NullKind, Value};

use super::{FunctionDef, Functions};

pub fn register(functions: &mut Functions) {
    functions.register(FunctionDef::new("upper", 1, 1, upper));
    functions.register(FunctionDef::new("lower", 1, 1, lower));
    functions.register(FunctionDef::new("trim", 1, 1, trim));
    functions.register(FunctionDef::new("size", 1, 1, size));
}

fn upper(args: &[Value]) -> Value {
    unary_text(&args[0], |s| s.to_uppercase())
}

fn lower(args: &[Value]) -> Value {
    unary_text(&args[0], |s| s.to_lowercase())
}

fn trim(args: &[Value]) -> Value {
    unary_text(&args[0], |s| s.trim().to_string())
}

/// Element count for containers, character count for strings.
fn size(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Utf8(s) => Value::int8(s.chars().count() as i64),
        Value::List(l) => Value::int8(l.len() as i64),
        Value::Map(m) => Value::int8(m.len() as i64),
        Value::Set(s) => Value::int8(s.len() as i64),
        Value::DataSet(d) => Value::int8(d.row_count() as i64),
        _ => Value::Null(NullKind::BadType),
    }
}

fn unary_text(arg: &Value, op: impl Fn(&str) -> String) -> Value {
    match arg {
        Value::Null(kind) => Value::Null(*kind),
        Value::Utf8(s) => Value::Utf8(op(s)),
        _ => Value::Null(NullKind::BadType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mapping() {
        assert_eq!(upper(&[Value::utf8("aBc")]), Value::utf8("ABC"));
        assert_eq!(lower(&[Value::utf8("aBc")]), Value::utf8("abc"));
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(&[Value::utf8("  x  ")]), Value::utf8("x"));
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&[Value::utf8("héllo")]), Value::int8(5));
        assert_eq!(
            size(&[Value::list(vec![Value::int8(1), Value::int8(2)])]),
            Value::int8(2)
        );
        assert_eq!(size(&[Value::int8(1)]), Value::Null(NullKind::BadType));
    }
}
