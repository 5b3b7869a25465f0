// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use lattica_expr::{
    CallExpression, ContainsExpression, EndsWithExpression, Expression, Functions, InExpression,
    MapExpression, MapProjectionExpression, MapProjectionField, PropertyKind, RegexExpression,
    SetExpression, StartsWithExpression, UnaryOperator, UuidExpression,
    VersionedVariableExpression,
};
use lattica_type::{
    DataSet, Date, DateTime, Edge, Map, NullKind, Path, Set, Step, Tag, Time, Type, Value, Vertex,
};
use lattica_wire::{decode_expression, decode_value, encode_expression, encode_value};

fn roundtrip(expr: &Expression) {
    let functions = Functions::standard();
    let bytes = encode_expression(expr);
    let decoded = decode_expression(&bytes, &functions).unwrap();
    assert_eq!(&decoded, expr, "round trip changed {}", expr);
    assert_eq!(decoded.to_string(), expr.to_string());
}

fn sample_vertex() -> Vertex {
    Vertex::new(
        Value::utf8("v1"),
        vec![Tag::new("person", [("name".to_string(), Value::utf8("ann"))].into_iter().collect())],
    )
}

#[test]
fn test_value_round_trip_for_every_kind() {
    let values = vec![
        Value::Empty,
        Value::Null(NullKind::DivByZero),
        Value::bool(true),
        Value::int8(i64::MIN),
        Value::float8(-2.5),
        Value::utf8("héllo \"world\""),
        Value::date(Date::new(2021, 3, 9).unwrap()),
        Value::time(Time::new(8, 30, 0, 42).unwrap()),
        Value::datetime(DateTime::new(
            Date::new(2021, 3, 9).unwrap(),
            Time::new(8, 30, 0, 42).unwrap(),
        )),
        Value::list(vec![Value::int8(1), Value::utf8("x"), Value::Empty]),
        Value::map(Map::new(
            [("k".to_string(), Value::list(vec![Value::int8(1)]))].into_iter().collect(),
        )),
        Value::set([Value::int8(1), Value::int8(2)].into_iter().collect::<Set>()),
        Value::dataset(DataSet::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Value::int8(1), Value::null()]],
        )),
        Value::vertex(sample_vertex()),
        Value::edge(Edge::new(
            Value::utf8("a"),
            Value::utf8("b"),
            "follows",
            3,
            [("since".to_string(), Value::int8(2020))].into_iter().collect(),
        )),
        Value::path(Path::new(
            sample_vertex(),
            vec![Step::new(sample_vertex(), "follows", 0, BTreeMap::new())],
        )),
    ];
    for value in values {
        let bytes = encode_value(&value);
        assert_eq!(decode_value(&bytes).unwrap(), value, "round trip changed {}", value);
    }
}

#[test]
fn test_expression_round_trip_for_every_kind() {
    let functions = Functions::standard();
    let one = || Expression::constant(Value::int8(1));
    let exprs = vec![
        one(),
        Expression::add(one(), one()),
        Expression::sub(one(), one()),
        Expression::mul(one(), one()),
        Expression::div(one(), one()),
        Expression::rem(one(), one()),
        Expression::unary(UnaryOperator::Negate, one()),
        Expression::unary(UnaryOperator::Increment, Expression::variable("n")),
        Expression::equal(one(), one()),
        Expression::not_equal(one(), one()),
        Expression::less_than(one(), one()),
        Expression::less_than_equal(one(), one()),
        Expression::greater_than(one(), one()),
        Expression::greater_than_equal(one(), one()),
        Expression::In(InExpression {
            value: Box::new(one()),
            collection: Box::new(Expression::list(vec![one(), one()])),
            negated: true,
        }),
        Expression::Contains(ContainsExpression {
            left: Box::new(Expression::constant(Value::utf8("banana"))),
            right: Box::new(Expression::constant(Value::utf8("ana"))),
            negated: false,
        }),
        Expression::StartsWith(StartsWithExpression {
            left: Box::new(Expression::constant(Value::utf8("banana"))),
            right: Box::new(Expression::constant(Value::utf8("ba"))),
            negated: true,
        }),
        Expression::EndsWith(EndsWithExpression {
            left: Box::new(Expression::constant(Value::utf8("banana"))),
            right: Box::new(Expression::constant(Value::utf8("na"))),
            negated: false,
        }),
        Expression::Regex(RegexExpression {
            left: Box::new(Expression::constant(Value::utf8("x"))),
            right: Box::new(Expression::constant(Value::utf8("x+"))),
        }),
        Expression::and(one(), one()),
        Expression::or(one(), one()),
        Expression::xor(one(), one()),
        Expression::cast(one(), Type::Float8),
        Expression::Call(
            CallExpression::new(&functions, "abs", vec![one()]).unwrap(),
        ),
        Expression::list(vec![one(), Expression::list(vec![one()])]),
        Expression::Set(SetExpression { items: vec![one()] }),
        Expression::Map(MapExpression {
            items: vec![("k".to_string(), one())],
        }),
        Expression::MapProjection(MapProjectionExpression {
            subject: Box::new(Expression::variable("v")),
            fields: vec![MapProjectionField {
                key: "*".to_string(),
                value: Expression::property(PropertyKind::VarProp, "v", "*"),
            }],
        }),
        Expression::input_prop("age"),
        Expression::property(PropertyKind::VarProp, "v", "name"),
        Expression::property(PropertyKind::SrcProp, "person", "name"),
        Expression::property(PropertyKind::DstProp, "person", "name"),
        Expression::property(PropertyKind::EdgeProp, "follows", "since"),
        Expression::property(PropertyKind::EdgeSrcId, "follows", ""),
        Expression::property(PropertyKind::EdgeType, "follows", ""),
        Expression::property(PropertyKind::EdgeRank, "follows", ""),
        Expression::property(PropertyKind::EdgeDstId, "follows", ""),
        Expression::variable("n"),
        Expression::VersionedVariable(VersionedVariableExpression {
            name: "v".to_string(),
            version: Box::new(Expression::constant(Value::int8(-1))),
        }),
        Expression::Uuid(UuidExpression),
    ];
    for expr in &exprs {
        roundtrip(expr);
    }
}

#[test]
fn test_multi_level_tree_round_trip() {
    let expr = Expression::sub(
        Expression::add(
            Expression::constant(Value::float8(1.0)),
            Expression::constant(Value::float8(2.0)),
        ),
        Expression::mul(
            Expression::constant(Value::float8(1.0)),
            Expression::input_prop("weight"),
        ),
    );
    roundtrip(&expr);
}

#[test]
fn test_truncated_buffer_is_a_recoverable_error() {
    let bytes = encode_expression(&Expression::constant(Value::utf8("hello")));
    for len in 0..bytes.len() {
        assert!(
            decode_expression(&bytes[..len], &Functions::standard()).is_err(),
            "truncation at {} went unnoticed",
            len
        );
    }
}

#[test]
fn test_trailing_garbage_is_a_recoverable_error() {
    let mut bytes = encode_expression(&Expression::constant(Value::int8(1)));
    bytes.push(0x01);
    assert!(decode_expression(&bytes, &Functions::standard()).is_err());
}

#[test]
fn test_unresolvable_call_is_a_recoverable_error() {
    let functions = Functions::standard();
    let call = CallExpression::new(
        &functions,
        "abs",
        vec![Expression::constant(Value::int8(1))],
    )
    .unwrap();
    let bytes = encode_expression(&Expression::Call(call));

    // An empty registry cannot re-resolve the builtin.
    let err = decode_expression(&bytes, &Functions::new()).unwrap_err();
    assert!(err.to_string().contains("abs"));
}

#[test]
#[should_panic(expected = "unknown expression kind byte")]
fn test_unknown_kind_byte_is_fatal() {
    decode_expression(&[0xff], &Functions::standard()).ok();
}
