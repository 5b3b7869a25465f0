// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

use lattica_expr::FunctionError;

/// A recoverable decode failure: a truncated buffer, trailing garbage, or
/// a call that no longer resolves against the registry. Corrupt kind
/// bytes are not represented here; they are fatal.
#[derive(Debug, PartialEq)]
pub struct Error(pub String);

#[macro_export]
macro_rules! invalid_data {
    ($($args:tt)*) => { Err($crate::Error(format!($($args)*))) };
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error {}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Self(err.to_string())
    }
}

impl From<FunctionError> for Error {
    fn from(err: FunctionError) -> Self {
        Self(err.to_string())
    }
}
