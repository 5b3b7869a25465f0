// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod arith;
mod compare;
mod dataset;
mod date;
mod datetime;
mod edge;
mod hash;
pub mod is;
mod json;
mod list;
mod logic;
mod map;
mod null;
mod ordered_f64;
mod path;
mod set;
mod time;
mod r#type;
mod vertex;

pub use dataset::DataSet;
pub use date::Date;
pub use datetime::DateTime;
pub use edge::Edge;
pub use list::List;
pub use map::Map;
pub use null::NullKind;
pub use ordered_f64::OrderedF64;
pub use path::{Path, Step};
pub use set::Set;
pub use time::Time;
pub use r#type::Type;
pub use vertex::{Tag, Vertex};

/// A runtime value, represented as a native Rust type.
///
/// Exactly one variant is active at a time. Every operator defined on
/// `Value` is total: for any combination of operand kinds it returns a
/// `Value` (possibly a [`NullKind`] carrier), never an error and never a
/// panic.
///
/// The derived `Ord` is the structural order used for container keys and
/// sorting: variant rank first (declaration order), payload second.
/// Cross-kind ranking is arbitrary but stable. Query-level comparison
/// semantics (numeric cross-type compare, null propagation) live in
/// [`Value::equals`] and [`Value::query_compare`].
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    /// Value is absent (a requested key or column that does not exist).
    #[default]
    Empty,
    /// No valid value, carrying the reason it is invalid.
    Null(NullKind),
    /// A boolean: true or false.
    Boolean(bool),
    /// An 8-byte signed integer.
    Int8(i64),
    /// An 8-byte floating point.
    Float8(OrderedF64),
    /// A UTF-8 encoded text.
    Utf8(String),
    /// A date value (year, month, day).
    Date(Date),
    /// A time value (hour, minute, second, microsecond).
    Time(Time),
    /// A date and time value with microsecond precision.
    DateTime(DateTime),
    /// An ordered collection of values.
    List(List),
    /// A string-keyed collection of values.
    Map(Map),
    /// An unordered, deduplicated collection of values.
    Set(Set),
    /// A tabular result: column names plus rows of values.
    DataSet(DataSet),
    /// A graph vertex: id plus tagged property maps.
    Vertex(Vertex),
    /// A graph edge: endpoints, edge name, rank and properties.
    Edge(Edge),
    /// A walk through the graph: a start vertex plus steps.
    Path(Path),
}

impl Value {
    pub fn empty() -> Self {
        Value::Empty
    }

    pub fn null() -> Self {
        Value::Null(NullKind::Generic)
    }

    pub fn bool(v: impl Into<bool>) -> Self {
        Value::Boolean(v.into())
    }

    pub fn int8(v: impl Into<i64>) -> Self {
        Value::Int8(v.into())
    }

    /// Non-orderable floats never enter the value space: NaN collapses to
    /// `Null(NaN)` at the constructor.
    pub fn float8(v: impl Into<f64>) -> Self {
        OrderedF64::try_from(v.into())
            .map(Value::Float8)
            .unwrap_or(Value::Null(NullKind::NaN))
    }

    pub fn utf8(v: impl Into<String>) -> Self {
        Value::Utf8(v.into())
    }

    pub fn date(v: impl Into<Date>) -> Self {
        Value::Date(v.into())
    }

    pub fn time(v: impl Into<Time>) -> Self {
        Value::Time(v.into())
    }

    pub fn datetime(v: impl Into<DateTime>) -> Self {
        Value::DateTime(v.into())
    }

    pub fn list(v: impl Into<List>) -> Self {
        Value::List(v.into())
    }

    pub fn map(v: impl Into<Map>) -> Self {
        Value::Map(v.into())
    }

    pub fn set(v: impl Into<Set>) -> Self {
        Value::Set(v.into())
    }

    pub fn dataset(v: impl Into<DataSet>) -> Self {
        Value::DataSet(v.into())
    }

    pub fn vertex(v: impl Into<Vertex>) -> Self {
        Value::Vertex(v.into())
    }

    pub fn edge(v: impl Into<Edge>) -> Self {
        Value::Edge(v.into())
    }

    pub fn path(v: impl Into<Path>) -> Self {
        Value::Path(v.into())
    }
}

impl Value {
    pub fn get_type(&self) -> Type {
        match self {
            Value::Empty => Type::Empty,
            Value::Null(_) => Type::Null,
            Value::Boolean(_) => Type::Boolean,
            Value::Int8(_) => Type::Int8,
            Value::Float8(_) => Type::Float8,
            Value::Utf8(_) => Type::Utf8,
            Value::Date(_) => Type::Date,
            Value::Time(_) => Type::Time,
            Value::DateTime(_) => Type::DateTime,
            Value::List(_) => Type::List,
            Value::Map(_) => Type::Map,
            Value::Set(_) => Type::Set,
            Value::DataSet(_) => Type::DataSet,
            Value::Vertex(_) => Type::Vertex,
            Value::Edge(_) => Type::Edge,
            Value::Path(_) => Type::Path,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Empty => f.write_str("__EMPTY__"),
            Value::Null(kind) => Display::fmt(kind, f),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Int8(value) => Display::fmt(value, f),
            Value::Float8(value) => Display::fmt(value, f),
            Value::Utf8(value) => write!(f, "\"{}\"", value.escape_default()),
            Value::Date(value) => Display::fmt(value, f),
            Value::Time(value) => Display::fmt(value, f),
            Value::DateTime(value) => Display::fmt(value, f),
            Value::List(value) => Display::fmt(value, f),
            Value::Map(value) => Display::fmt(value, f),
            Value::Set(value) => Display::fmt(value, f),
            Value::DataSet(value) => Display::fmt(value, f),
            Value::Vertex(value) => Display::fmt(value, f),
            Value::Edge(value) => Display::fmt(value, f),
            Value::Path(value) => Display::fmt(value, f),
        }
    }
}
