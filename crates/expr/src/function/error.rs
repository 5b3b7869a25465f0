// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
    #[error("function '{name}' does not exist")]
    NotFound { name: String },

    #[error("function '{name}' accepts {min}..={max} arguments, got {actual}")]
    ArityMismatch { name: String, min: usize, max: usize, actual: usize },
}
