// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Value;

/// A deduplicated collection of values ordered by the structural value
/// order; owns its elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Set {
    pub values: BTreeSet<Value>,
}

impl Set {
    pub fn new(values: BTreeSet<Value>) -> Self {
        Self { values }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Value> {
        self.values.iter()
    }
}

impl From<BTreeSet<Value>> for Set {
    fn from(values: BTreeSet<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // "set{...}" keeps the rendering distinct from a map literal.
        let items = self.values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "set{{{}}}", items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let set: Set = [Value::int8(1), Value::int8(1), Value::int8(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "set{1, 2}");
    }
}
