// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::{Map, NullKind, Value};

use super::{FunctionDef, Functions};

pub fn register(functions: &mut Functions) {
    functions.register(FunctionDef::new("properties", 1, 1, properties));
    functions.register(FunctionDef::new("id", 1, 1, id));
    functions.register(FunctionDef::new("rank", 1, 1, rank));
    functions.register(FunctionDef::new("type", 1, 1, edge_type));
}

/// The property map of a vertex (all tags merged), an edge, or a map
/// itself.
fn properties(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Vertex(v) => Value::Map(Map::new(v.properties())),
        Value::Edge(e) => Value::Map(Map::new(e.props.clone())),
        Value::Map(m) => Value::Map(m.clone()),
        _ => Value::Null(NullKind::BadType),
    }
}

fn id(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Vertex(v) => (*v.vid).clone(),
        _ => Value::Null(NullKind::BadType),
    }
}

fn rank(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Edge(e) => Value::int8(e.rank),
        _ => Value::Null(NullKind::BadType),
    }
}

fn edge_type(args: &[Value]) -> Value {
    match &args[0] {
        Value::Null(kind) => Value::Null(*kind),
        Value::Edge(e) => Value::utf8(e.name.clone()),
        _ => Value::Null(NullKind::BadType),
    }
}

#[cfg(test)]
mod tests {
    use lattica_type::{Edge, Tag, Vertex};

    use super::*;

    fn edge() -> Value {
        Value::edge(Edge::new(
            Value::utf8("a"),
            Value::utf8("b"),
            "follows",
            7,
            [("since".to_string(), Value::int8(2020))].into_iter().collect(),
        ))
    }

    #[test]
    fn test_properties_of_vertex_merges_tags() {
        let vertex = Value::vertex(Vertex::new(
            Value::utf8("v"),
            vec![
                Tag::new("a", [("x".to_string(), Value::int8(1))].into_iter().collect()),
                Tag::new("b", [("y".to_string(), Value::int8(2))].into_iter().collect()),
            ],
        ));
        let props = properties(&[vertex]);
        let expected: Map = [
            ("x".to_string(), Value::int8(1)),
            ("y".to_string(), Value::int8(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(props, Value::Map(expected));
    }

    #[test]
    fn test_edge_accessors() {
        assert_eq!(rank(&[edge()]), Value::int8(7));
        assert_eq!(edge_type(&[edge()]), Value::utf8("follows"));
        let props = properties(&[edge()]);
        assert_eq!(
            props,
            Value::Map([("since".to_string(), Value::int8(2020))].into_iter().collect::<Map>())
        );
    }

    #[test]
    fn test_id() {
        let vertex = Value::vertex(Vertex::new(Value::utf8("v1"), vec![]));
        assert_eq!(id(&[vertex]), Value::utf8("v1"));
        assert_eq!(id(&[Value::int8(1)]), Value::Null(NullKind::BadType));
    }
}
