// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use super::{NullKind, Value};

impl Value {
    pub fn is_empty_value(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    /// A null that records a failure, as opposed to a plain null.
    pub fn is_bad_null(&self) -> bool {
        matches!(self, Value::Null(kind) if *kind != NullKind::Generic)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int8(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float8(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int8(_) | Value::Float8(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Utf8(_))
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Value::Date(_) | Value::Time(_) | Value::DateTime(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self, Value::DataSet(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_) | Value::Set(_) | Value::DataSet(_))
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Value::Vertex(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Value::Edge(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Value::Path(_))
    }

    /// As an `f64` where the kind allows it.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int8(v) => Some(*v as f64),
            Value::Float8(v) => Some(v.value()),
            _ => None,
        }
    }
}
