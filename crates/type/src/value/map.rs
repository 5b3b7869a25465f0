// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Value;

/// A string-keyed collection of values; owns its elements. Keys are kept
/// sorted, which makes the rendered text deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Map {
    pub kvs: BTreeMap<String, Value>,
}

impl Map {
    pub fn new(kvs: BTreeMap<String, Value>) -> Self {
        Self { kvs }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.kvs.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.kvs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Map {
    fn from(kvs: BTreeMap<String, Value>) -> Self {
        Self { kvs }
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { kvs: iter.into_iter().collect() }
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let items =
            self.kvs.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ");
        write!(f, "{{{}}}", items)
    }
}
