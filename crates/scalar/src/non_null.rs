//! Non-nullable wrapper applied to every builtin scalar.
//!
//! A leaf scalar only checks the shape of present values. Wrapping it in
//! [`NonNull`] makes the "absence is invalid" policy explicit at the type's
//! boundary: `null` is rejected before the leaf ever sees it. Types that
//! should accept `null` are built by an outer nullable layer instead of
//! loosening the leaf.
//!
//! # Examples
//!
//! ```
//! use lumen_scalar::prelude::*;
//! use serde_json::json;
//!
//! let result = INT.validate("age", &json!(null));
//! assert_eq!(result.errors(), ["Expected \"age\" to be a non-null value."]);
//! ```

use crate::descriptor::{Measurable, ScalarType};
use crate::error::ConversionError;
use crate::result::ValidationResult;

/// Rejects `null` and otherwise delegates to the wrapped scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NonNull<T> {
    inner: T,
}

impl<T> NonNull<T> {
    /// Wraps a scalar.
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped scalar.
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwraps the scalar.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ScalarType> ScalarType for NonNull<T> {
    type Value = T::Value;
    type Serialized = T::Serialized;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn validate(&self, key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value> {
        if input.is_null() {
            tracing::trace!(scalar = self.name(), key, "rejected null input");
            return ValidationResult::failure(format!(
                "Expected \"{key}\" to be a non-null value."
            ));
        }
        self.inner.validate(key, input)
    }

    fn serialize(&self, value: &Self::Value) -> Self::Serialized {
        self.inner.serialize(value)
    }

    fn deserialize(&self, serialized: Self::Serialized) -> Result<Self::Value, ConversionError> {
        self.inner.deserialize(serialized)
    }

    fn sanitize(&self, raw: serde_json::Value) -> Result<Self::Value, ConversionError> {
        self.inner.sanitize(raw)
    }
}

impl<T: Measurable> Measurable for NonNull<T> {
    type Magnitude = T::Magnitude;
    const MAGNITUDE_LABEL: &'static str = T::MAGNITUDE_LABEL;
    const MAGNITUDE_NOUN: Option<&'static str> = T::MAGNITUDE_NOUN;

    fn measure(&self, accepted: &serde_json::Value) -> Option<Self::Magnitude> {
        self.inner.measure(accepted)
    }
}
