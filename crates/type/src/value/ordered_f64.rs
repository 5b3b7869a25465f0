// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error raised when a float cannot participate in a total order.
#[derive(Debug, PartialEq)]
pub struct OrderedFloatError;

/// An `f64` with a total order, so float values can live in sorted
/// containers and be hashed. NaN is rejected at construction; negative
/// zero is normalized to positive zero.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct OrderedF64(f64);

impl OrderedF64 {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.0.to_bits() ^ ((self.0.to_bits() as i64 >> 63) as u64 >> 1);
        let b = other.0.to_bits() ^ ((other.0.to_bits() as i64 >> 63) as u64 >> 1);
        (a as i64).cmp(&(b as i64))
    }
}

impl Hash for OrderedF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for OrderedF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for OrderedF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:?} keeps the decimal point on integral floats ("1.0", not
        // "1"), which the canonical expression text relies on.
        write!(f, "{:?}", self.0)
    }
}

impl From<OrderedF64> for f64 {
    fn from(v: OrderedF64) -> Self {
        v.0
    }
}

impl TryFrom<f64> for OrderedF64 {
    type Error = OrderedFloatError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        let normalized = if f == 0.0 { 0.0 } else { f };
        if f.is_nan() { Err(OrderedFloatError) } else { Ok(OrderedF64(normalized)) }
    }
}

impl Serialize for OrderedF64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for OrderedF64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let f = f64::deserialize(deserializer)?;
        OrderedF64::try_from(f).map_err(|_| serde::de::Error::custom("NaN is not a valid value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn test_sorting() {
        let mut values = vec![
            OrderedF64::try_from(10.0).unwrap(),
            OrderedF64::try_from(-2.0).unwrap(),
            OrderedF64::try_from(5.0).unwrap(),
        ];
        values.sort();
        let sorted: Vec<f64> = values.into_iter().map(|v| v.0).collect();
        assert_eq!(sorted, vec![-2.0, 5.0, 10.0]);
    }

    #[test]
    fn test_hash_eq() {
        let a = OrderedF64::try_from(1.0).unwrap();
        let b = OrderedF64::try_from(1.0).unwrap();

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_normalizes_zero() {
        let pos_zero = OrderedF64::try_from(0.0).unwrap();
        let neg_zero = OrderedF64::try_from(-0.0).unwrap();

        assert_eq!(pos_zero, neg_zero);
    }

    #[test]
    fn test_nan_fails() {
        assert!(OrderedF64::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_display_keeps_decimal_point() {
        assert_eq!(OrderedF64::try_from(1.0).unwrap().to_string(), "1.0");
        assert_eq!(OrderedF64::try_from(2.5).unwrap().to_string(), "2.5");
    }
}
