//! Macros for declaring leaf scalars with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`scalar!`]: create a leaf scalar (struct + `ScalarType` impl + constructors)

// ============================================================================
// SCALAR MACRO
// ============================================================================

/// Creates a leaf scalar: struct definition, constructors, and a
/// [`ScalarType`](crate::ScalarType) implementation.
///
/// The generated struct holds only its description, defaults to the given
/// one, and exposes `NAME`, `DEFAULT_DESCRIPTION`, a `const fn new()` and
/// `with_description`. `#[derive(Debug, Clone, PartialEq, Eq, Hash)]` is
/// always applied.
///
/// `accepts` decides whether the untyped input has the right shape and
/// `error` formats the single failure message for a field `key`. An
/// optional `sanitize` block overrides the default JSON conversion.
///
/// ```rust,ignore
/// scalar! {
///     /// A yes/no value.
///     pub BooleanType {
///         name: "Boolean",
///         description: "A value indicating whether a condition is true or false.",
///         value: bool,
///         serialized: bool,
///     }
///     accepts(input) { input.is_boolean() }
///     error(key) { format!("Expected \"{key}\" to be a boolean.") }
///     serialize(value) { *value }
///     deserialize(serialized) { Ok(serialized) }
/// }
/// ```
#[macro_export]
macro_rules! scalar {
    (
        $(#[$meta:meta])*
        $vis:vis $ty:ident {
            name: $name:literal,
            description: $description:literal,
            value: $value:ty,
            serialized: $serialized:ty $(,)?
        }
        accepts($inp:ident) $accepts:block
        error($key:ident) $err:block
        serialize($val:ident) $ser:block
        deserialize($wire:ident) $de:block
        $(sanitize($raw:ident) $san:block)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $ty {
            description: ::std::borrow::Cow<'static, str>,
        }

        impl $ty {
            /// Name reported in messages and schema output.
            pub const NAME: &'static str = $name;

            /// Description used unless overridden.
            pub const DEFAULT_DESCRIPTION: &'static str = $description;

            /// Creates the scalar with its default description.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    description: ::std::borrow::Cow::Borrowed($description),
                }
            }

            /// Replaces the description.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_description(
                mut self,
                description: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.description = description.into();
                self
            }
        }

        impl ::std::default::Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ScalarType for $ty {
            type Value = $value;
            type Serialized = $serialized;

            fn name(&self) -> &str {
                $name
            }

            fn description(&self) -> &str {
                &self.description
            }

            fn validate(
                &self,
                $key: &str,
                $inp: &::serde_json::Value,
            ) -> $crate::ValidationResult<::serde_json::Value> {
                if $accepts {
                    $crate::ValidationResult::success($inp.clone())
                } else {
                    $crate::ValidationResult::failure($err)
                }
            }

            fn serialize(&self, $val: &Self::Value) -> Self::Serialized $ser

            fn deserialize(
                &self,
                $wire: Self::Serialized,
            ) -> ::std::result::Result<Self::Value, $crate::error::ConversionError> $de

            $(
                fn sanitize(
                    &self,
                    $raw: ::serde_json::Value,
                ) -> ::std::result::Result<Self::Value, $crate::error::ConversionError> $san
            )?
        }
    };
}
