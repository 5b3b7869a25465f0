// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lattica_expr::{EvaluationContext, Expression};
use lattica_type::Value;
use tracing::{debug, trace};

use crate::cache::CompiledCache;
use crate::schema::SchemaManager;

use lower::{lower, materialize};

mod lower;

/// A compiled expression: semantically interchangeable with interpreting
/// the tree it was lowered from.
pub type NativeFn = Arc<dyn Fn(&dyn EvaluationContext) -> Value + Send + Sync>;

/// Lowers expressions to native callables and shares them through a
/// canonical-text-keyed cache.
///
/// Explicitly constructed and passed wherever compilation is wanted;
/// there is no process-global instance.
pub struct ExpressionCompiler {
    cache: CompiledCache,
    compilations: AtomicU64,
}

impl ExpressionCompiler {
    pub fn new() -> Self {
        Self { cache: CompiledCache::new(), compilations: AtomicU64::new(0) }
    }

    /// Compiles one tree, bypassing the cache. `None` means some node
    /// falls outside the supported subset and the caller must interpret
    /// instead.
    pub fn compile(&self, expr: &Expression, schema: &dyn SchemaManager) -> Option<NativeFn> {
        self.compilations.fetch_add(1, Ordering::Relaxed);
        match lower(expr, schema) {
            Some(lowered) => {
                trace!(expression = %expr, "compiled expression");
                Some(materialize(lowered))
            }
            None => {
                debug!(expression = %expr, "unsupported construct, falling back to interpretation");
                None
            }
        }
    }

    /// The cached entry point: looks up the canonical text and compiles
    /// at most once per text across all callers.
    pub fn get_or_compile(&self, expr: &Expression, schema: &dyn SchemaManager) -> Option<NativeFn> {
        let key = expr.to_string();
        self.cache.get_or_insert_with(&key, || self.compile(expr, schema))
    }

    /// How many compilations actually ran (cache hits do not count).
    pub fn compilations(&self) -> u64 {
        self.compilations.load(Ordering::Relaxed)
    }

    pub fn cache(&self) -> &CompiledCache {
        &self.cache
    }
}

impl Default for ExpressionCompiler {
    fn default() -> Self {
        Self::new()
    }
}
