// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Value;

/// A graph edge: endpoint ids, the edge name, a rank that disambiguates
/// parallel edges, and its properties.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: Box<Value>,
    pub dst: Box<Value>,
    pub name: String,
    pub rank: i64,
    pub props: BTreeMap<String, Value>,
}

impl Edge {
    pub fn new(
        src: Value,
        dst: Value,
        name: impl Into<String>,
        rank: i64,
        props: BTreeMap<String, Value>,
    ) -> Self {
        Self { src: Box::new(src), dst: Box::new(dst), name: name.into(), rank, props }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let props =
            self.props.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ");
        write!(f, "[:{} {}->{} @{} {{{}}}]", self.name, self.src, self.dst, self.rank, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let edge = Edge::new(
            Value::utf8("a"),
            Value::utf8("b"),
            "follows",
            0,
            [("since".to_string(), Value::int8(2020))].into_iter().collect(),
        );
        assert_eq!(edge.to_string(), "[:follows \"a\"->\"b\" @0 {since: 2020}]");
    }
}
