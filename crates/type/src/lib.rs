// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod value;

pub use value::{
    DataSet, Date, DateTime, Edge, List, Map, NullKind, OrderedF64, Path, Set, Step, Tag, Time,
    Type, Value, Vertex,
};
