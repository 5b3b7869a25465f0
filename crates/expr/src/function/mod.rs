// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;
use std::sync::Arc;

use lattica_type::Value;

pub mod entity;
pub mod math;
pub mod text;

pub use error::FunctionError;

mod error;

/// A builtin scalar callable: already-evaluated arguments in, one value
/// out. Total like every value operator: data problems come back as Null
/// subkinds.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A registered builtin with its accepted arity range.
#[derive(Debug)]
pub struct FunctionDef {
    pub name: String,
    pub min_arity: usize,
    pub max_arity: usize,
    pub apply: BuiltinFn,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, min_arity: usize, max_arity: usize, apply: BuiltinFn) -> Self {
        Self { name: name.into(), min_arity, max_arity, apply }
    }
}

/// The builtin scalar-function registry. Resolution happens once, at
/// expression construction; the returned binding is reused across
/// evaluations.
pub struct Functions {
    functions: HashMap<String, Arc<FunctionDef>>,
}

impl Functions {
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// A registry with the standard builtin set.
    pub fn standard() -> Self {
        let mut functions = Self::new();
        math::register(&mut functions);
        text::register(&mut functions);
        entity::register(&mut functions);
        functions.register(FunctionDef::new("coalesce", 1, usize::MAX, coalesce));
        functions
    }

    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), Arc::new(def));
    }

    /// Resolves `name` for a call site with `arity` arguments. Unknown
    /// names and arity mismatches are recoverable errors for the caller
    /// constructing the expression.
    pub fn get(&self, name: &str, arity: usize) -> Result<Arc<FunctionDef>, FunctionError> {
        let def = self
            .functions
            .get(name)
            .ok_or_else(|| FunctionError::NotFound { name: name.to_string() })?;
        if arity < def.min_arity || arity > def.max_arity {
            return Err(FunctionError::ArityMismatch {
                name: name.to_string(),
                min: def.min_arity,
                max: def.max_arity,
                actual: arity,
            });
        }
        Ok(Arc::clone(def))
    }
}

impl Default for Functions {
    fn default() -> Self {
        Self::standard()
    }
}

fn coalesce(args: &[Value]) -> Value {
    for arg in args {
        if !arg.is_null() && !arg.is_empty_value() {
            return arg.clone();
        }
    }
    Value::null()
}
