//! Hard failures raised outside the validation path.
//!
//! A rejected input is never an error here: it is a
//! [`ValidationResult::Failure`](crate::ValidationResult::Failure). The
//! types in this module cover conversions on input that should already
//! have been validated, and mistakes made while assembling a registry.

/// A conversion between wire, JSON and internal forms failed.
///
/// Seeing one of these means `validate` was skipped or the caller fed
/// serialized data from somewhere untrusted; it is not translated back into
/// a validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The accepted JSON could not be turned into the internal value.
    #[error("`{scalar}` could not convert accepted input: {source}")]
    Sanitize {
        /// Name of the scalar doing the conversion.
        scalar: String,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },

    /// A string handed to the date scalar is not ISO 8601.
    #[cfg(feature = "temporal")]
    #[error("`{input}` is not an ISO 8601 date string: {source}")]
    InvalidDate {
        /// The rejected string.
        input: String,
        /// Parser failure from the last attempted format.
        #[source]
        source: chrono::ParseError,
    },

    /// A date string falls outside the years `0000..=9999`.
    #[cfg(feature = "temporal")]
    #[error("`{input}` is outside the supported years 0000 to 9999")]
    DateOutOfRange {
        /// The rejected string.
        input: String,
    },

    /// The accepted input was not a string where one was required.
    #[error("`{scalar}` expected {expected}, found {actual}")]
    TypeMismatch {
        /// Name of the scalar doing the conversion.
        scalar: String,
        /// Expected JSON shape.
        expected: &'static str,
        /// Actual JSON shape.
        actual: &'static str,
    },

    /// A wire number does not fit in a signed 64-bit integer.
    #[error("number {value} does not fit in a 64-bit signed integer")]
    IntegerOverflow {
        /// The offending number as written on the wire.
        value: String,
    },
}

/// Assembling a [`ScalarRegistry`](crate::registry::ScalarRegistry) failed.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two entries share a lookup key.
    #[error("scalar `{0}` is already registered")]
    DuplicateScalar(String),

    /// A lookup key is not registered.
    #[error("scalar `{0}` is not registered")]
    UnknownScalar(String),

    /// A definition declares neither `min` nor `max`.
    #[error("definition `{0}` must declare `min`, `max`, or both")]
    EmptyBounds(String),

    /// A definition's `min` is greater than its `max`.
    #[error("definition `{key}` has min {min} greater than max {max}")]
    InvertedBounds {
        /// Lookup key of the definition.
        key: String,
        /// Declared minimum.
        min: String,
        /// Declared maximum.
        max: String,
    },

    /// An integer definition tried to rename its type.
    #[error("definition `{0}` is an int refinement and keeps the name `Int`")]
    RenamedInt(String),

    /// A string definition declared a negative length.
    #[error("definition `{key}` has negative length bound {bound}")]
    NegativeLength {
        /// Lookup key of the definition.
        key: String,
        /// The offending bound.
        bound: i64,
    },

    /// The configuration document could not be parsed.
    #[error("invalid scalar configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Returns a short name for the shape of a JSON value, used in messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
