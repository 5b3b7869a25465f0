// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use lattica_type::Type;

/// Property name → physical type table of one tag or edge type.
pub type PropertyTypes = HashMap<String, Type>;

/// Supplies the physical types the compiler needs to lower property
/// accessors. Keyed by the symbolic tag/edge-type names the planner
/// leaves in the tree.
pub trait SchemaManager: Send + Sync {
    fn tag_schema(&self, tag: &str) -> Option<&PropertyTypes>;

    fn edge_schema(&self, edge: &str) -> Option<&PropertyTypes>;
}

/// An in-memory [`SchemaManager`] seeded up front.
#[derive(Default)]
pub struct StandardSchemaManager {
    tags: HashMap<String, PropertyTypes>,
    edges: HashMap<String, PropertyTypes>,
}

impl StandardSchemaManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_prop(mut self, tag: impl Into<String>, prop: impl Into<String>, ty: Type) -> Self {
        self.tags.entry(tag.into()).or_default().insert(prop.into(), ty);
        self
    }

    pub fn with_edge_prop(
        mut self,
        edge: impl Into<String>,
        prop: impl Into<String>,
        ty: Type,
    ) -> Self {
        self.edges.entry(edge.into()).or_default().insert(prop.into(), ty);
        self
    }
}

impl SchemaManager for StandardSchemaManager {
    fn tag_schema(&self, tag: &str) -> Option<&PropertyTypes> {
        self.tags.get(tag)
    }

    fn edge_schema(&self, edge: &str) -> Option<&PropertyTypes> {
        self.edges.get(edge)
    }
}
