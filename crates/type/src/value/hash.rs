// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::hash::{Hash, Hasher};

use xxhash_rust::xxh3::Xxh3;

use super::Value;

/// Stable hash: a discriminant byte (the type code) followed by the
/// payload bytes. Two values hash alike only if kind and payload agree,
/// so `Int8(1)` and `Boolean(true)` never collide by construction.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.get_type().code());
        match self {
            Value::Empty => {}
            Value::Null(kind) => kind.hash(state),
            Value::Boolean(v) => v.hash(state),
            Value::Int8(v) => v.hash(state),
            Value::Float8(v) => v.hash(state),
            Value::Utf8(v) => v.hash(state),
            Value::Date(v) => v.hash(state),
            Value::Time(v) => v.hash(state),
            Value::DateTime(v) => v.hash(state),
            Value::List(v) => v.hash(state),
            Value::Map(v) => v.hash(state),
            Value::Set(v) => v.hash(state),
            Value::DataSet(v) => v.hash(state),
            Value::Vertex(v) => v.hash(state),
            Value::Edge(v) => v.hash(state),
            Value::Path(v) => v.hash(state),
        }
    }
}

impl Value {
    /// The stable 64-bit digest of this value (xxh3).
    pub fn hash64(&self) -> u64 {
        let mut hasher = Xxh3::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = Value::list(vec![Value::int8(1), Value::utf8("x")]);
        let b = Value::list(vec![Value::int8(1), Value::utf8("x")]);
        assert_eq!(a.hash64(), b.hash64());
    }

    #[test]
    fn test_kind_separates_hashes() {
        assert_ne!(Value::int8(1).hash64(), Value::bool(true).hash64());
        assert_ne!(Value::int8(0).hash64(), Value::Empty.hash64());
    }
}
