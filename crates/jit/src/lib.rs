// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

//! Compilation of hot expressions into native callables.
//!
//! The compiler lowers a supported subset (numerics, booleans, strings)
//! onto three typed lanes and materializes the same boxed [`Value`]
//! (lattica_type::Value) the interpreter produces, so callers never see
//! which path ran. Anything outside the subset makes `compile` return
//! `None` and the caller falls back to interpretation; that fallback is
//! part of the contract, not an error.
//!
//! Compiled functions are cached by the canonical expression text under a
//! single reader-writer lock; entries live for the process lifetime (a
//! documented scalability caveat, there is no eviction).

pub mod cache;
pub mod compile;
pub mod schema;

pub use cache::CompiledCache;
pub use compile::{ExpressionCompiler, NativeFn};
pub use schema::{PropertyTypes, SchemaManager, StandardSchemaManager};
