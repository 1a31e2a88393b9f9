//! Object-safe view of a scalar.
//!
//! [`ScalarType`] carries associated types, so descriptors with different
//! value types cannot share a collection. [`DynScalar`] drops the typed
//! half of the contract and works on JSON only: it validates raw input and
//! coerces accepted input into its canonical wire form.
//!
//! Every `ScalarType` whose wire form converts into JSON gets a
//! `DynScalar` implementation for free.

use std::fmt;

use crate::descriptor::ScalarType;
use crate::error::ConversionError;
use crate::result::ValidationResult;

/// A scalar usable behind `dyn`, e.g. in a
/// [`ScalarRegistry`](crate::registry::ScalarRegistry).
pub trait DynScalar: Send + Sync + fmt::Debug {
    /// See [`ScalarType::name`].
    fn scalar_name(&self) -> &str;

    /// See [`ScalarType::description`].
    fn scalar_description(&self) -> &str;

    /// See [`ScalarType::validate`].
    fn validate_input(&self, key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value>;

    /// Validates `input`, then sanitizes and serializes it back into JSON.
    ///
    /// The result is the canonical wire form, e.g. a date normalized to
    /// UTC.
    fn coerce_input(
        &self,
        key: &str,
        input: &serde_json::Value,
    ) -> Result<ValidationResult<serde_json::Value>, ConversionError>;
}

impl<T> DynScalar for T
where
    T: ScalarType + fmt::Debug,
    T::Serialized: Into<serde_json::Value>,
{
    fn scalar_name(&self) -> &str {
        self.name()
    }

    fn scalar_description(&self) -> &str {
        self.description()
    }

    fn validate_input(&self, key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value> {
        self.validate(key, input)
    }

    fn coerce_input(
        &self,
        key: &str,
        input: &serde_json::Value,
    ) -> Result<ValidationResult<serde_json::Value>, ConversionError> {
        Ok(self
            .validate_and_sanitize(key, input)?
            .map(|value| self.to_json(&value)))
    }
}
