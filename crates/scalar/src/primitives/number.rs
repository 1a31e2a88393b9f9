//! Integer and float scalars
//!
//! The two are told apart by the JSON number's shape: `3` is an integer,
//! `3.0` and `3.5` are floats. Neither accepts the other's shape.

use serde_json::Number;

use crate::Measurable;
use crate::error::ConversionError;

/// 2^63, the first float that no longer fits in `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

crate::scalar! {
    /// A signed 64-bit integer.
    pub IntType {
        name: "Int",
        description: "A signed integer.",
        value: i64,
        serialized: Number,
    }
    accepts(input) { input.is_i64() }
    error(key) { format!("Expected \"{key}\" to be an integer.") }
    serialize(value) { Number::from(*value) }
    deserialize(serialized) { truncate_to_i64(&serialized) }
}

crate::scalar! {
    /// A double-precision floating-point number.
    pub FloatType {
        name: "Float",
        description: "A signed double-precision floating-point value.",
        value: f64,
        serialized: f64,
    }
    accepts(input) { input.is_f64() }
    error(key) { format!("Expected \"{key}\" to be a float.") }
    serialize(value) { *value }
    deserialize(serialized) { Ok(serialized) }
}

/// Reads a wire number as an integer, truncating any fraction toward zero.
fn truncate_to_i64(number: &Number) -> Result<i64, ConversionError> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }

    let overflow = || ConversionError::IntegerOverflow {
        value: number.to_string(),
    };
    let truncated = number.as_f64().ok_or_else(overflow)?.trunc();
    if (-I64_LIMIT..I64_LIMIT).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(overflow())
    }
}

impl Measurable for IntType {
    type Magnitude = i64;
    const MAGNITUDE_LABEL: &'static str = "Value";
    const MAGNITUDE_NOUN: Option<&'static str> = None;

    fn measure(&self, accepted: &serde_json::Value) -> Option<i64> {
        accepted.as_i64()
    }
}
