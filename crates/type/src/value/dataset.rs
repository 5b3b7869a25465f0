// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Value;

/// A tabular result: named columns plus rows of values; owns its cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DataSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl Display for DataSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "dataset{{[{}]", self.columns.join(", "))?;
        for row in &self.rows {
            let cells = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
            write!(f, "; [{}]", cells)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let ds = DataSet::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Value::int8(1), Value::int8(2)]],
        );
        assert_eq!(ds.to_string(), "dataset{[a, b]; [1, 2]}");
    }
}
