// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The physical type of a [`Value`](super::Value), one tag per variant.
///
/// Also the vocabulary of the schema tables the compiler consults and of
/// the cast expression target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Type {
    Empty,
    Null,
    Boolean,
    Int8,
    Float8,
    Utf8,
    Date,
    Time,
    DateTime,
    List,
    Map,
    Set,
    DataSet,
    Vertex,
    Edge,
    Path,
}

impl Type {
    /// Stable one-byte code, used by the wire codec and as the leading
    /// discriminant of the value hash.
    pub fn code(&self) -> u8 {
        match self {
            Type::Empty => 0x00,
            Type::Null => 0x01,
            Type::Boolean => 0x02,
            Type::Int8 => 0x03,
            Type::Float8 => 0x04,
            Type::Utf8 => 0x05,
            Type::Date => 0x06,
            Type::Time => 0x07,
            Type::DateTime => 0x08,
            Type::List => 0x09,
            Type::Map => 0x0a,
            Type::Set => 0x0b,
            Type::DataSet => 0x0c,
            Type::Vertex => 0x0d,
            Type::Edge => 0x0e,
            Type::Path => 0x0f,
        }
    }

    pub fn from_code(code: u8) -> Option<Type> {
        Some(match code {
            0x00 => Type::Empty,
            0x01 => Type::Null,
            0x02 => Type::Boolean,
            0x03 => Type::Int8,
            0x04 => Type::Float8,
            0x05 => Type::Utf8,
            0x06 => Type::Date,
            0x07 => Type::Time,
            0x08 => Type::DateTime,
            0x09 => Type::List,
            0x0a => Type::Map,
            0x0b => Type::Set,
            0x0c => Type::DataSet,
            0x0d => Type::Vertex,
            0x0e => Type::Edge,
            0x0f => Type::Path,
            _ => return None,
        })
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Empty => "Empty",
            Type::Null => "Null",
            Type::Boolean => "Boolean",
            Type::Int8 => "Int8",
            Type::Float8 => "Float8",
            Type::Utf8 => "Utf8",
            Type::Date => "Date",
            Type::Time => "Time",
            Type::DateTime => "DateTime",
            Type::List => "List",
            Type::Map => "Map",
            Type::Set => "Set",
            Type::DataSet => "DataSet",
            Type::Vertex => "Vertex",
            Type::Edge => "Edge",
            Type::Path => "Path",
        };
        f.write_str(name)
    }
}
