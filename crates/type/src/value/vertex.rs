// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Value;

/// A named property group attached to a vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub props: BTreeMap<String, Value>,
}

impl Tag {
    pub fn new(name: impl Into<String>, props: BTreeMap<String, Value>) -> Self {
        Self { name: name.into(), props }
    }
}

/// A graph vertex: an id value plus zero or more tagged property maps.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub vid: Box<Value>,
    pub tags: Vec<Tag>,
}

impl Vertex {
    pub fn new(vid: Value, tags: Vec<Tag>) -> Self {
        Self { vid: Box::new(vid), tags }
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// All properties across all tags, later tags winning on key clashes.
    pub fn properties(&self) -> BTreeMap<String, Value> {
        let mut all = BTreeMap::new();
        for tag in &self.tags {
            for (k, v) in &tag.props {
                all.insert(k.clone(), v.clone());
            }
        }
        all
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.vid)?;
        for tag in &self.tags {
            let props =
                tag.props.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ");
            write!(f, " :{}{{{}}}", tag.name, props)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_merges_tags() {
        let vertex = Vertex::new(
            Value::utf8("v1"),
            vec![
                Tag::new("person", [("name".to_string(), Value::utf8("ann"))].into_iter().collect()),
                Tag::new("player", [("rank".to_string(), Value::int8(3))].into_iter().collect()),
            ],
        );
        let props = vertex.properties();
        assert_eq!(props.len(), 2);
        assert_eq!(props["rank"], Value::int8(3));
    }

    #[test]
    fn test_display() {
        let vertex = Vertex::new(
            Value::utf8("v1"),
            vec![Tag::new("person", [("name".to_string(), Value::utf8("ann"))].into_iter().collect())],
        );
        assert_eq!(vertex.to_string(), "(\"v1\" :person{name: \"ann\"})");
    }
}
