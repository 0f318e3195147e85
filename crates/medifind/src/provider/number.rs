//! Number formatting for the persisted layout.
//!
//! Whole-valued decimals (`900.0`) are written as integers (`900`) so stored
//! fees and ratings look the way clients submitted them.

use serde::Serializer;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub(crate) fn serialize_option<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) => serialize(n, serializer),
        None => serializer.serialize_none(),
    }
}
