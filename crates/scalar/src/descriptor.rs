//! The contract every scalar type descriptor implements.
//!
//! A descriptor is parameterized by two representations:
//!
//! - **`Value`**: the strongly typed form application code works with
//! - **`Serialized`**: the wire form handed to the output layer
//!
//! External input arrives untyped as a [`serde_json::Value`] and passes
//! through [`ScalarType::validate`] before it is converted:
//!
//! ```text
//!   raw JSON ──validate──► accepted JSON ──sanitize──► Value ──serialize──► Serialized
//!                                                        ▲                       │
//!                                                        └──────deserialize──────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use lumen_scalar::prelude::*;
//! use serde_json::json;
//!
//! let accepted = INT.validate("age", &json!(42));
//! assert!(accepted.is_success());
//!
//! let value = INT.validate_and_sanitize("age", &json!(42)).unwrap().into_result().unwrap();
//! assert_eq!(value, 42);
//! assert_eq!(INT.to_json(&value), json!(42));
//! ```

use serde::de::DeserializeOwned;

use crate::error::ConversionError;
use crate::result::ValidationResult;

// ============================================================================
// SCALAR TYPE
// ============================================================================

/// A named, described leaf type that validates and converts values.
///
/// Implementations are immutable after construction and can be shared
/// freely between threads.
pub trait ScalarType: Send + Sync {
    /// Internal representation used by application code.
    type Value: DeserializeOwned;

    /// Wire representation produced for output.
    type Serialized;

    /// Stable identifier used in messages and schema printing.
    fn name(&self) -> &str;

    /// Human-readable documentation.
    fn description(&self) -> &str;

    /// Checks an untyped input.
    ///
    /// `key` names the field being checked and only appears in messages.
    /// On success the accepted input is returned unchanged.
    fn validate(&self, key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value>;

    /// Produces the wire form of an already valid value.
    fn serialize(&self, value: &Self::Value) -> Self::Serialized;

    /// Rebuilds the internal value from its wire form.
    ///
    /// Malformed wire data is a hard [`ConversionError`], not a validation
    /// failure.
    fn deserialize(&self, serialized: Self::Serialized) -> Result<Self::Value, ConversionError>;

    /// Converts input accepted by [`validate`](Self::validate) into the
    /// internal value.
    ///
    /// The default reads the JSON straight into `Value`, which widens
    /// integers into floats where `Value` is a float.
    fn sanitize(&self, raw: serde_json::Value) -> Result<Self::Value, ConversionError> {
        serde_json::from_value(raw).map_err(|source| ConversionError::Sanitize {
            scalar: self.name().to_owned(),
            source,
        })
    }

    /// Returns a descriptor usable in input position.
    ///
    /// Scalars are already valid input types, so this is the identity.
    fn coerce_to_input_object(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }

    /// Runs [`validate`](Self::validate) and, on success,
    /// [`sanitize`](Self::sanitize).
    ///
    /// The outer `Result` reports a conversion defect; the inner
    /// [`ValidationResult`] reports whether the input was accepted.
    fn validate_and_sanitize(
        &self,
        key: &str,
        input: &serde_json::Value,
    ) -> Result<ValidationResult<Self::Value>, ConversionError> {
        match self.validate(key, input) {
            ValidationResult::Success(accepted) => {
                Ok(ValidationResult::Success(self.sanitize(accepted)?))
            }
            ValidationResult::Failure(errors) => Ok(ValidationResult::Failure(errors)),
        }
    }

    /// Serializes a value and embeds the wire form in JSON.
    fn to_json(&self, value: &Self::Value) -> serde_json::Value
    where
        Self::Serialized: Into<serde_json::Value>,
    {
        self.serialize(value).into()
    }
}

// ============================================================================
// MEASURABLE
// ============================================================================

/// A scalar whose accepted inputs have a natural, comparable magnitude.
///
/// Refinements use the magnitude to enforce bounds: an integer's numeric
/// value, a string's length.
pub trait Measurable: ScalarType {
    /// The measured quantity.
    type Magnitude: PartialOrd + Copy + std::fmt::Display + Send + Sync;

    /// Word that opens a bound violation message, e.g. `Value` or `Length`.
    const MAGNITUDE_LABEL: &'static str;

    /// Word inserted into generated descriptions, e.g. `length`.
    ///
    /// `None` when the magnitude is the value itself.
    const MAGNITUDE_NOUN: Option<&'static str>;

    /// Measures an input previously accepted by `validate`.
    ///
    /// Returns `None` if the input does not have the expected shape.
    fn measure(&self, accepted: &serde_json::Value) -> Option<Self::Magnitude>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Accepts anything and counts array elements.
    struct Anything;

    impl ScalarType for Anything {
        type Value = serde_json::Value;
        type Serialized = serde_json::Value;

        fn name(&self) -> &str {
            "Anything"
        }

        fn description(&self) -> &str {
            "Any JSON value."
        }

        fn validate(&self, _key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value> {
            ValidationResult::success(input.clone())
        }

        fn serialize(&self, value: &Self::Value) -> Self::Serialized {
            value.clone()
        }

        fn deserialize(&self, serialized: Self::Serialized) -> Result<Self::Value, ConversionError> {
            Ok(serialized)
        }
    }

    #[test]
    fn default_sanitize_is_identity_shaped() {
        let raw = json!({"a": [1, 2]});
        assert_eq!(Anything.sanitize(raw.clone()).unwrap(), raw);
    }

    #[test]
    fn coerce_to_input_object_is_identity() {
        let scalar = Anything;
        assert!(std::ptr::eq(scalar.coerce_to_input_object(), &scalar));
    }

    #[test]
    fn to_json_embeds_wire_form() {
        assert_eq!(Anything.to_json(&json!("x")), json!("x"));
    }
}
