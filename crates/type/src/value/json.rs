// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use serde_json::json;

use super::Value;

impl Value {
    /// Renders this value into a JSON document. Nulls lose their subkind;
    /// temporal values become their canonical strings; graph values become
    /// objects mirroring their fields.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Empty => serde_json::Value::Null,
            Value::Null(_) => serde_json::Value::Null,
            Value::Boolean(v) => json!(v),
            Value::Int8(v) => json!(v),
            Value::Float8(v) => json!(v.value()),
            Value::Utf8(v) => json!(v),
            Value::Date(v) => json!(v.to_string()),
            Value::Time(v) => json!(v.to_string()),
            Value::DateTime(v) => json!(v.to_string()),
            Value::List(v) => {
                serde_json::Value::Array(v.iter().map(Value::to_json).collect())
            }
            Value::Map(v) => serde_json::Value::Object(
                v.kvs.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Set(v) => {
                serde_json::Value::Array(v.iter().map(Value::to_json).collect())
            }
            Value::DataSet(v) => json!({
                "columns": v.columns,
                "rows": v.rows.iter()
                    .map(|row| row.iter().map(Value::to_json).collect::<Vec<_>>())
                    .collect::<Vec<_>>(),
            }),
            Value::Vertex(v) => json!({
                "vid": v.vid.to_json(),
                "tags": v.tags.iter().map(|tag| json!({
                    "name": tag.name,
                    "props": tag.props.iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect::<serde_json::Map<_, _>>(),
                })).collect::<Vec<_>>(),
            }),
            Value::Edge(v) => json!({
                "src": v.src.to_json(),
                "dst": v.dst.to_json(),
                "name": v.name,
                "rank": v.rank,
                "props": v.props.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<serde_json::Map<_, _>>(),
            }),
            Value::Path(v) => json!({
                "src": Value::Vertex(v.src.clone()).to_json(),
                "steps": v.steps.iter().map(|step| json!({
                    "dst": Value::Vertex(step.dst.clone()).to_json(),
                    "name": step.name,
                    "rank": step.rank,
                    "props": step.props.iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect::<serde_json::Map<_, _>>(),
                })).collect::<Vec<_>>(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(Value::int8(1).to_json(), json!(1));
        assert_eq!(Value::float8(1.5).to_json(), json!(1.5));
        assert_eq!(Value::utf8("x").to_json(), json!("x"));
        assert_eq!(Value::null().to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_containers() {
        let list = Value::list(vec![Value::int8(1), Value::bool(true)]);
        assert_eq!(list.to_json(), json!([1, true]));

        let map: super::super::Map =
            [("k".to_string(), Value::int8(7))].into_iter().collect();
        assert_eq!(Value::Map(map).to_json(), json!({"k": 7}));
    }
}
