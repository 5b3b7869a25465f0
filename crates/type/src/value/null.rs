// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The reason a [`Value::Null`](super::Value::Null) carries no valid value.
///
/// Distinct from [`Value::Empty`](super::Value::Empty): `Empty` means the
/// value was never there, a null subkind means an operation could not
/// produce one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NullKind {
    /// Plain null, no further qualification.
    Generic,
    /// A float operation produced NaN.
    NaN,
    /// Operand kinds do not support the requested operation.
    BadType,
    /// The payload could not be interpreted (e.g. an unparsable cast).
    BadData,
    /// Integer arithmetic left the 64-bit range.
    Overflow,
    /// Division or modulo by zero.
    DivByZero,
    /// A tag referenced by a property accessor does not exist.
    BadTag,
    /// A numeric conversion left the target range.
    OutOfRange,
}

impl NullKind {
    /// Stable one-byte code, used by the wire codec.
    pub fn code(&self) -> u8 {
        match self {
            NullKind::Generic => 0x00,
            NullKind::NaN => 0x01,
            NullKind::BadType => 0x02,
            NullKind::BadData => 0x03,
            NullKind::Overflow => 0x04,
            NullKind::DivByZero => 0x05,
            NullKind::BadTag => 0x06,
            NullKind::OutOfRange => 0x07,
        }
    }

    pub fn from_code(code: u8) -> Option<NullKind> {
        Some(match code {
            0x00 => NullKind::Generic,
            0x01 => NullKind::NaN,
            0x02 => NullKind::BadType,
            0x03 => NullKind::BadData,
            0x04 => NullKind::Overflow,
            0x05 => NullKind::DivByZero,
            0x06 => NullKind::BadTag,
            0x07 => NullKind::OutOfRange,
            _ => return None,
        })
    }
}

impl Display for NullKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NullKind::Generic => f.write_str("null"),
            NullKind::NaN => f.write_str("null(nan)"),
            NullKind::BadType => f.write_str("null(bad_type)"),
            NullKind::BadData => f.write_str("null(bad_data)"),
            NullKind::Overflow => f.write_str("null(overflow)"),
            NullKind::DivByZero => f.write_str("null(div_by_zero)"),
            NullKind::BadTag => f.write_str("null(bad_tag)"),
            NullKind::OutOfRange => f.write_str("null(out_of_range)"),
        }
    }
}
