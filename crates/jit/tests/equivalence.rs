// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_expr::{
    EvaluationContext, Evaluator, Expression, Functions, PropertyKind, StandardContext,
    UnaryOperator,
};
use lattica_jit::{ExpressionCompiler, SchemaManager, StandardSchemaManager};
use lattica_type::{NullKind, Type, Value};

fn assert_equivalent_with(
    expr: &Expression,
    ctx: &dyn EvaluationContext,
    schema: &dyn SchemaManager,
) {
    let functions = Functions::standard();
    let interpreted = Evaluator::new(&functions).evaluate(expr, ctx);

    let compiler = ExpressionCompiler::new();
    let native = compiler
        .compile(expr, schema)
        .unwrap_or_else(|| panic!("{} should compile", expr));
    let compiled = native(ctx);

    assert_eq!(interpreted, compiled, "paths diverge on {}", expr);
}

fn assert_equivalent(expr: &Expression) {
    assert_equivalent_with(expr, &StandardContext::new(), &StandardSchemaManager::new());
}

fn int(v: i64) -> Expression {
    Expression::constant(Value::int8(v))
}

fn float(v: f64) -> Expression {
    Expression::constant(Value::float8(v))
}

fn text(v: &str) -> Expression {
    Expression::constant(Value::utf8(v))
}

fn boolean(v: bool) -> Expression {
    Expression::constant(Value::bool(v))
}

#[test]
fn test_pure_int_arithmetic() {
    let expr = Expression::rem(
        Expression::sub(Expression::mul(Expression::add(int(3), int(4)), int(2)), int(5)),
        int(3),
    );
    assert_equivalent(&expr);

    let functions = Functions::standard();
    let value = Evaluator::new(&functions).evaluate(&expr, &StandardContext::new());
    assert_eq!(value, Value::int8(0));
}

#[test]
fn test_mixed_int_double_arithmetic() {
    assert_equivalent(&Expression::mul(Expression::add(int(1), float(2.5)), int(2)));
    assert_equivalent(&Expression::div(float(7.0), int(2)));
    assert_equivalent(&Expression::div(int(7), int(2)));
}

#[test]
fn test_reference_scenario_evaluates_to_one() {
    // ((1.0 + 2.0) - (1.0 * 2.0)) == 1.0 on both paths.
    let expr = Expression::sub(
        Expression::add(float(1.0), float(2.0)),
        Expression::mul(float(1.0), float(2.0)),
    );
    assert_equivalent(&expr);

    let compiler = ExpressionCompiler::new();
    let native = compiler.compile(&expr, &StandardSchemaManager::new()).unwrap();
    assert_eq!(native(&StandardContext::new()), Value::float8(1.0));
}

#[test]
fn test_int64_max_plus_one_overflows_identically() {
    let expr = Expression::add(int(i64::MAX), int(1));
    assert_equivalent(&expr);

    let compiler = ExpressionCompiler::new();
    let native = compiler.compile(&expr, &StandardSchemaManager::new()).unwrap();
    assert_eq!(native(&StandardContext::new()), Value::Null(NullKind::Overflow));
}

#[test]
fn test_division_by_zero_matches() {
    assert_equivalent(&Expression::div(int(5), int(0)));
    assert_equivalent(&Expression::div(float(5.0), float(0.0)));
    assert_equivalent(&Expression::rem(int(5), int(0)));
}

#[test]
fn test_boolean_logic() {
    let expr = Expression::xor(
        Expression::and(boolean(true), boolean(false)),
        Expression::or(boolean(false), boolean(true)),
    );
    assert_equivalent(&expr);
    assert_equivalent(&Expression::unary(UnaryOperator::Not, boolean(true)));
}

#[test]
fn test_string_equality_and_ordering() {
    assert_equivalent(&Expression::equal(text("x"), text("x")));
    assert_equivalent(&Expression::less_than(text("a"), text("b")));
    assert_equivalent(&Expression::greater_than_equal(text("b"), text("b")));
    assert_equivalent(&Expression::equal(
        Expression::add(text("foo"), text("bar")),
        text("foobar"),
    ));
}

#[test]
fn test_string_predicates() {
    let expr = Expression::Contains(lattica_expr::ContainsExpression {
        left: Box::new(text("banana")),
        right: Box::new(text("ana")),
        negated: true,
    });
    assert_equivalent(&expr);
}

#[test]
fn test_numeric_cross_kind_comparison() {
    assert_equivalent(&Expression::less_than(int(1), float(1.5)));
    assert_equivalent(&Expression::equal(int(2), float(2.0)));
}

#[test]
fn test_casts() {
    assert_equivalent(&Expression::equal(
        Expression::cast(text("42"), Type::Int8),
        int(42),
    ));
    assert_equivalent(&Expression::cast(float(1.0), Type::Utf8));
    assert_equivalent(&Expression::cast(text("2.5"), Type::Float8));
    assert_equivalent(&Expression::cast(text("nope"), Type::Int8));
}

#[test]
fn test_unary_negate() {
    assert_equivalent(&Expression::unary(UnaryOperator::Negate, int(5)));
    assert_equivalent(&Expression::unary(UnaryOperator::Negate, int(i64::MIN)));
    assert_equivalent(&Expression::unary(UnaryOperator::Negate, float(2.5)));
}

#[test]
fn test_null_constant_propagates_identically() {
    assert_equivalent(&Expression::add(Expression::constant(Value::null()), int(1)));
    assert_equivalent(&Expression::equal(
        Expression::constant(Value::Null(NullKind::Overflow)),
        int(1),
    ));
}

#[test]
fn test_schema_typed_properties() {
    let schema = StandardSchemaManager::new()
        .with_tag_prop("person", "age", Type::Int8)
        .with_tag_prop("person", "name", Type::Utf8)
        .with_edge_prop("follows", "weight", Type::Float8);
    let ctx = StandardContext::new()
        .with_src_prop("person", "age", Value::int8(30))
        .with_dst_prop("person", "name", Value::utf8("ann"))
        .with_edge_prop("follows", "weight", Value::float8(0.5))
        .with_edge_prop("follows", "_rank", Value::int8(3));

    let expr = Expression::add(
        Expression::property(PropertyKind::SrcProp, "person", "age"),
        int(1),
    );
    assert_equivalent_with(&expr, &ctx, &schema);

    let expr = Expression::equal(
        Expression::property(PropertyKind::DstProp, "person", "name"),
        text("ann"),
    );
    assert_equivalent_with(&expr, &ctx, &schema);

    let expr = Expression::mul(
        Expression::property(PropertyKind::EdgeProp, "follows", "weight"),
        int(2),
    );
    assert_equivalent_with(&expr, &ctx, &schema);

    let expr = Expression::greater_than(
        Expression::property(PropertyKind::EdgeRank, "follows", ""),
        int(1),
    );
    assert_equivalent_with(&expr, &ctx, &schema);
}

#[test]
fn test_missing_property_is_null_on_both_paths() {
    let schema = StandardSchemaManager::new().with_tag_prop("person", "age", Type::Int8);
    let ctx = StandardContext::new();
    let expr = Expression::add(
        Expression::property(PropertyKind::SrcProp, "person", "age"),
        int(1),
    );
    assert_equivalent_with(&expr, &ctx, &schema);

    let compiler = ExpressionCompiler::new();
    let native = compiler.compile(&expr, &schema).unwrap();
    assert_eq!(native(&ctx), Value::null());
}

#[test]
fn test_unsupported_constructs_fall_back() {
    let compiler = ExpressionCompiler::new();
    let schema = StandardSchemaManager::new();

    let unsupported = vec![
        Expression::list(vec![int(1)]),
        Expression::variable("n"),
        Expression::is_in(int(1), Expression::list(vec![int(1)])),
        Expression::unary(UnaryOperator::Increment, Expression::variable("n")),
        Expression::constant(Value::list(vec![Value::int8(1)])),
        Expression::property(PropertyKind::InputProp, "", "age"),
    ];
    for expr in &unsupported {
        assert!(
            compiler.compile(expr, &schema).is_none(),
            "{} should fall back to interpretation",
            expr
        );
    }
    // Every attempt was counted, none crashed.
    assert_eq!(compiler.compilations(), unsupported.len() as u64);
}
