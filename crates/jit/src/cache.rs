// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::compile::NativeFn;

/// Canonical expression text → compiled function, shared by every caller.
///
/// One reader-writer lock guards the table: lookups take the read lock
/// and run concurrently; an insert takes the write lock, re-checks for a
/// concurrent winner, and only then compiles — so a given text is
/// compiled at most once no matter how many threads race on it.
/// Compilation runs while the write lock is held and blocks readers for
/// its duration. Entries are never evicted; they live as long as the
/// process.
pub struct CompiledCache {
    entries: RwLock<HashMap<String, NativeFn>>,
}

impl CompiledCache {
    pub fn new() -> Self {
        Self { entries: RwLock::new(HashMap::new()) }
    }

    pub fn get(&self, key: &str) -> Option<NativeFn> {
        self.entries.read().get(key).cloned()
    }

    /// The double-checked protocol: read-lock lookup, then write-lock
    /// re-check, then compile-and-insert. `compile` returning `None`
    /// (unsupported expression) inserts nothing, so the caller falls
    /// back to interpretation every time it asks.
    pub fn get_or_insert_with(
        &self,
        key: &str,
        compile: impl FnOnce() -> Option<NativeFn>,
    ) -> Option<NativeFn> {
        if let Some(hit) = self.get(key) {
            return Some(hit);
        }
        let mut entries = self.entries.write();
        if let Some(hit) = entries.get(key) {
            return Some(hit.clone());
        }
        let compiled = compile()?;
        entries.insert(key.to_string(), compiled.clone());
        Some(compiled)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CompiledCache {
    fn default() -> Self {
        Self::new()
    }
}
