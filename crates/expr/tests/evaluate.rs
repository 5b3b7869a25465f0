// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cell::Cell;

use lattica_expr::{
    CallExpression, EvaluationContext, Evaluator, Expression, Functions, MapProjectionExpression,
    MapProjectionField, PropertyKind, StandardContext, UnaryOperator, UuidExpression,
    VersionedVariableExpression,
};
use lattica_type::{Map, NullKind, Type, Value};

fn eval(expr: &Expression) -> Value {
    let functions = Functions::standard();
    let evaluator = Evaluator::new(&functions);
    evaluator.evaluate(expr, &StandardContext::new())
}

fn eval_with(expr: &Expression, ctx: &dyn EvaluationContext) -> Value {
    let functions = Functions::standard();
    let evaluator = Evaluator::new(&functions);
    evaluator.evaluate(expr, ctx)
}

#[test]
fn test_arithmetic_tree() {
    // ((1.0 + 2.0) - (1.0 * 2.0)) == 1.0
    let expr = Expression::sub(
        Expression::add(
            Expression::constant(Value::float8(1.0)),
            Expression::constant(Value::float8(2.0)),
        ),
        Expression::mul(
            Expression::constant(Value::float8(1.0)),
            Expression::constant(Value::float8(2.0)),
        ),
    );
    assert_eq!(eval(&expr), Value::float8(1.0));
}

#[test]
fn test_division_by_zero_is_a_null_not_a_crash() {
    let expr = Expression::div(
        Expression::constant(Value::int8(5)),
        Expression::constant(Value::int8(0)),
    );
    assert_eq!(eval(&expr), Value::Null(NullKind::DivByZero));
}

#[test]
fn test_membership_in_list() {
    let list = Expression::list(vec![
        Expression::constant(Value::int8(1)),
        Expression::constant(Value::int8(2)),
        Expression::constant(Value::int8(3)),
    ]);
    let expr = Expression::is_in(Expression::constant(Value::int8(5)), list);
    assert_eq!(eval(&expr), Value::bool(false));
}

/// A context that counts how often the pipeline input is touched, to
/// observe that logical operators evaluate both sides.
#[derive(Default)]
struct CountingContext {
    inner: StandardContext,
    input_reads: Cell<usize>,
}

impl EvaluationContext for CountingContext {
    fn get_var(&self, name: &str) -> Value {
        self.inner.get_var(name)
    }

    fn get_versioned_var(&self, name: &str, version: i64) -> Value {
        self.inner.get_versioned_var(name, version)
    }

    fn get_var_prop(&self, name: &str, prop: &str) -> Value {
        self.inner.get_var_prop(name, prop)
    }

    fn get_edge_prop(&self, edge: &str, prop: &str) -> Value {
        self.inner.get_edge_prop(edge, prop)
    }

    fn get_src_prop(&self, tag: &str, prop: &str) -> Value {
        self.inner.get_src_prop(tag, prop)
    }

    fn get_dst_prop(&self, tag: &str, prop: &str) -> Value {
        self.inner.get_dst_prop(tag, prop)
    }

    fn get_input_prop(&self, prop: &str) -> Value {
        self.input_reads.set(self.input_reads.get() + 1);
        self.inner.get_input_prop(prop)
    }

    fn set_var(&self, name: &str, value: Value) {
        self.inner.set_var(name, value)
    }
}

#[test]
fn test_logical_and_does_not_short_circuit() {
    let ctx = CountingContext {
        inner: StandardContext::new().with_input_prop("flag", Value::bool(true)),
        ..CountingContext::default()
    };
    let expr = Expression::and(
        Expression::constant(Value::bool(false)),
        Expression::input_prop("flag"),
    );
    assert_eq!(eval_with(&expr, &ctx), Value::bool(false));
    assert_eq!(ctx.input_reads.get(), 1);
}

#[test]
fn test_logical_or_does_not_short_circuit() {
    let ctx = CountingContext {
        inner: StandardContext::new().with_input_prop("flag", Value::bool(false)),
        ..CountingContext::default()
    };
    let expr = Expression::or(
        Expression::constant(Value::bool(true)),
        Expression::input_prop("flag"),
    );
    assert_eq!(eval_with(&expr, &ctx), Value::bool(true));
    assert_eq!(ctx.input_reads.get(), 1);
}

#[test]
fn test_call_binds_at_construction_and_applies() {
    let functions = Functions::standard();
    let call = CallExpression::new(
        &functions,
        "abs",
        vec![Expression::constant(Value::float8(-1.1))],
    )
    .unwrap();
    assert_eq!(eval(&Expression::Call(call)), Value::float8(1.1));

    let err = CallExpression::new(
        &functions,
        "abs",
        vec![
            Expression::constant(Value::int8(1)),
            Expression::constant(Value::int8(2)),
        ],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "function 'abs' accepts 1..=1 arguments, got 2");
}

#[test]
fn test_property_accessors_resolve_through_context() {
    let ctx = StandardContext::new()
        .with_input_prop("age", Value::int8(30))
        .with_src_prop("person", "name", Value::utf8("ann"))
        .with_edge_prop("follows", "_rank", Value::int8(4));

    assert_eq!(eval_with(&Expression::input_prop("age"), &ctx), Value::int8(30));
    assert_eq!(
        eval_with(&Expression::property(PropertyKind::SrcProp, "person", "name"), &ctx),
        Value::utf8("ann")
    );
    assert_eq!(
        eval_with(&Expression::property(PropertyKind::EdgeRank, "follows", ""), &ctx),
        Value::int8(4)
    );
    // Missing resolutions are plain nulls, never errors.
    assert_eq!(eval_with(&Expression::input_prop("absent"), &ctx), Value::null());
}

#[test]
fn test_increment_rebinds_variable() {
    let ctx = StandardContext::new().with_var("n", Value::int8(41));
    let expr = Expression::unary(UnaryOperator::Increment, Expression::variable("n"));
    assert_eq!(eval_with(&expr, &ctx), Value::int8(42));
    assert_eq!(ctx.get_var("n"), Value::int8(42));

    let expr = Expression::unary(UnaryOperator::Decrement, Expression::variable("n"));
    assert_eq!(eval_with(&expr, &ctx), Value::int8(41));
}

#[test]
fn test_versioned_variable() {
    let ctx = StandardContext::new()
        .with_versioned_var("v", 0, Value::utf8("head"))
        .with_versioned_var("v", -1, Value::utf8("previous"));
    let expr = Expression::VersionedVariable(VersionedVariableExpression {
        name: "v".to_string(),
        version: Box::new(Expression::constant(Value::int8(-1))),
    });
    assert_eq!(eval_with(&expr, &ctx), Value::utf8("previous"));
}

#[test]
fn test_map_projection_star_expands_properties() {
    let ctx = StandardContext::new()
        .with_var("v", Value::map(Map::new(
            [
                ("name".to_string(), Value::utf8("ann")),
                ("age".to_string(), Value::int8(30)),
            ]
            .into_iter()
            .collect(),
        )));

    let expr = Expression::MapProjection(MapProjectionExpression {
        subject: Box::new(Expression::variable("v")),
        fields: vec![
            MapProjectionField {
                key: "*".to_string(),
                value: Expression::property(PropertyKind::VarProp, "v", "*"),
            },
            MapProjectionField {
                key: "fixed".to_string(),
                value: Expression::constant(Value::int8(1)),
            },
        ],
    });

    let expected: Map = [
        ("age".to_string(), Value::int8(30)),
        ("fixed".to_string(), Value::int8(1)),
        ("name".to_string(), Value::utf8("ann")),
    ]
    .into_iter()
    .collect();
    assert_eq!(eval_with(&expr, &ctx), Value::Map(expected));
}

#[test]
fn test_cast() {
    let expr = Expression::cast(Expression::constant(Value::utf8("42")), Type::Int8);
    assert_eq!(eval(&expr), Value::int8(42));

    let expr = Expression::cast(Expression::constant(Value::int8(1)), Type::Utf8);
    assert_eq!(eval(&expr), Value::utf8("1"));
}

#[test]
fn test_regex_full_match() {
    let expr = Expression::Regex(lattica_expr::RegexExpression {
        left: Box::new(Expression::constant(Value::utf8("abc123"))),
        right: Box::new(Expression::constant(Value::utf8("[a-c]+\\d+"))),
    });
    assert_eq!(eval(&expr), Value::bool(true));

    let expr = Expression::Regex(lattica_expr::RegexExpression {
        left: Box::new(Expression::constant(Value::utf8("abc123x"))),
        right: Box::new(Expression::constant(Value::utf8("[a-c]+\\d+"))),
    });
    assert_eq!(eval(&expr), Value::bool(false));
}

#[test]
fn test_uuid_is_fresh_per_evaluation() {
    let expr = Expression::Uuid(UuidExpression);
    let first = eval(&expr);
    let second = eval(&expr);
    assert!(first.is_str());
    assert_ne!(first, second);
}

#[test]
fn test_null_propagates_through_nested_arithmetic() {
    let expr = Expression::add(
        Expression::constant(Value::int8(1)),
        Expression::div(
            Expression::constant(Value::int8(1)),
            Expression::constant(Value::int8(0)),
        ),
    );
    assert_eq!(eval(&expr), Value::Null(NullKind::DivByZero));
}

#[test]
fn test_overflow_yields_overflow_null() {
    let expr = Expression::add(
        Expression::constant(Value::int8(i64::MAX)),
        Expression::constant(Value::int8(1)),
    );
    assert_eq!(eval(&expr), Value::Null(NullKind::Overflow));
}
