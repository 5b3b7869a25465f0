// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cell::RefCell;
use std::collections::HashMap;

use lattica_type::Value;

/// Resolves the symbolic references of an expression during evaluation.
///
/// Implementations must be total: a missing variable, tag or property
/// resolves to `Value::null()`, never an error. Edge id, type, rank and
/// destination go through [`get_edge_prop`](EvaluationContext::get_edge_prop)
/// with the reserved property names `_src`, `_type`, `_rank` and `_dst`.
pub trait EvaluationContext {
    fn get_var(&self, name: &str) -> Value;

    fn get_versioned_var(&self, name: &str, version: i64) -> Value;

    fn get_var_prop(&self, name: &str, prop: &str) -> Value;

    fn get_edge_prop(&self, edge: &str, prop: &str) -> Value;

    fn get_src_prop(&self, tag: &str, prop: &str) -> Value;

    fn get_dst_prop(&self, tag: &str, prop: &str) -> Value;

    fn get_input_prop(&self, prop: &str) -> Value;

    /// Rebinds a named variable; used by the increment and decrement
    /// operators.
    fn set_var(&self, name: &str, value: Value);
}

/// An in-memory [`EvaluationContext`] backed by plain maps. The engine
/// seeds one per pipeline stage; tests seed them directly.
#[derive(Default)]
pub struct StandardContext {
    vars: RefCell<HashMap<String, Value>>,
    versioned_vars: HashMap<(String, i64), Value>,
    input_props: HashMap<String, Value>,
    var_props: HashMap<(String, String), Value>,
    src_props: HashMap<(String, String), Value>,
    dst_props: HashMap<(String, String), Value>,
    edge_props: HashMap<(String, String), Value>,
}

impl StandardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: Value) -> Self {
        self.vars.get_mut().insert(name.into(), value);
        self
    }

    pub fn with_versioned_var(
        mut self,
        name: impl Into<String>,
        version: i64,
        value: Value,
    ) -> Self {
        self.versioned_vars.insert((name.into(), version), value);
        self
    }

    pub fn with_input_prop(mut self, prop: impl Into<String>, value: Value) -> Self {
        self.input_props.insert(prop.into(), value);
        self
    }

    pub fn with_var_prop(
        mut self,
        name: impl Into<String>,
        prop: impl Into<String>,
        value: Value,
    ) -> Self {
        self.var_props.insert((name.into(), prop.into()), value);
        self
    }

    pub fn with_src_prop(
        mut self,
        tag: impl Into<String>,
        prop: impl Into<String>,
        value: Value,
    ) -> Self {
        self.src_props.insert((tag.into(), prop.into()), value);
        self
    }

    pub fn with_dst_prop(
        mut self,
        tag: impl Into<String>,
        prop: impl Into<String>,
        value: Value,
    ) -> Self {
        self.dst_props.insert((tag.into(), prop.into()), value);
        self
    }

    pub fn with_edge_prop(
        mut self,
        edge: impl Into<String>,
        prop: impl Into<String>,
        value: Value,
    ) -> Self {
        self.edge_props.insert((edge.into(), prop.into()), value);
        self
    }
}

fn lookup(map: &HashMap<(String, String), Value>, a: &str, b: &str) -> Value {
    map.get(&(a.to_string(), b.to_string())).cloned().unwrap_or_else(Value::null)
}

impl EvaluationContext for StandardContext {
    fn get_var(&self, name: &str) -> Value {
        self.vars.borrow().get(name).cloned().unwrap_or_else(Value::null)
    }

    fn get_versioned_var(&self, name: &str, version: i64) -> Value {
        self.versioned_vars
            .get(&(name.to_string(), version))
            .cloned()
            .unwrap_or_else(Value::null)
    }

    fn get_var_prop(&self, name: &str, prop: &str) -> Value {
        lookup(&self.var_props, name, prop)
    }

    fn get_edge_prop(&self, edge: &str, prop: &str) -> Value {
        lookup(&self.edge_props, edge, prop)
    }

    fn get_src_prop(&self, tag: &str, prop: &str) -> Value {
        lookup(&self.src_props, tag, prop)
    }

    fn get_dst_prop(&self, tag: &str, prop: &str) -> Value {
        lookup(&self.dst_props, tag, prop)
    }

    fn get_input_prop(&self, prop: &str) -> Value {
        self.input_props.get(prop).cloned().unwrap_or_else(Value::null)
    }

    fn set_var(&self, name: &str, value: Value) {
        self.vars.borrow_mut().insert(name.to_string(), value);
    }
}
