//! Constrained scalars built by composing a parent with a bound.
//!
//! A [`Refined`] scalar owns its parent descriptor and a [`Bound`]. On
//! `validate` it asks the parent first; a parent failure is returned
//! untouched, so a refinement can never repair or reword it. Only inputs
//! the parent accepts are measured and checked against the bound.
//!
//! ```text
//!   input ──► parent.validate ──fail──► parent's messages
//!                   │
//!                 success
//!                   ▼
//!          measure(accepted) ──none──► "could not be measured"
//!                   │
//!                   ▼
//!             bound.admits? ──no──► one bound message
//!                   │
//!                  yes ──► parent's success
//! ```
//!
//! # Examples
//!
//! ```
//! use lumen_scalar::prelude::*;
//! use serde_json::json;
//!
//! let port = int_range(1, 65535);
//! assert!(port.validate("port", &json!(8080)).is_success());
//! assert_eq!(
//!     port.validate("port", &json!(0)).errors(),
//!     ["Value of \"port\" (0) must be between 1 and 65535"],
//! );
//! // Parent failures pass through unchanged.
//! assert_eq!(
//!     port.validate("port", &json!("80")).errors(),
//!     ["Expected \"port\" to be an integer."],
//! );
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::descriptor::{Measurable, ScalarType};
use crate::error::ConversionError;
use crate::non_null::NonNull;
use crate::primitives::{IdType, StringType};
use crate::result::ValidationResult;

// ============================================================================
// BOUNDS
// ============================================================================

/// A predicate over a scalar's magnitude, with its own wording.
pub trait Bound<M>: Send + Sync {
    /// Returns `true` if the magnitude satisfies the bound.
    fn admits(&self, magnitude: M) -> bool;

    /// Formats the single failure message for a violating magnitude.
    ///
    /// `label` opens the message (`Value`, `Length`) and `key` names the
    /// field being checked.
    fn violation(&self, label: &str, key: &str, actual: M) -> String;

    /// Generates the default description of a refined type.
    ///
    /// `noun` names the measured quantity when it is not the value itself.
    fn describe(&self, type_name: &str, noun: Option<&str>) -> String;
}

/// Inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min<M> {
    /// Smallest accepted magnitude.
    pub min: M,
}

impl<M> Min<M> {
    /// Creates the bound.
    pub const fn new(min: M) -> Self {
        Self { min }
    }
}

impl<M: PartialOrd + Display + Copy + Send + Sync> Bound<M> for Min<M> {
    fn admits(&self, magnitude: M) -> bool {
        magnitude >= self.min
    }

    fn violation(&self, label: &str, key: &str, actual: M) -> String {
        format!("{label} of \"{key}\" ({actual}) can not be lower than {}", self.min)
    }

    fn describe(&self, type_name: &str, noun: Option<&str>) -> String {
        match noun {
            Some(noun) => format!("{type_name} with minimum {noun} of {}", self.min),
            None => format!("{type_name} with minimum of {}", self.min),
        }
    }
}

/// Inclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max<M> {
    /// Largest accepted magnitude.
    pub max: M,
}

impl<M> Max<M> {
    /// Creates the bound.
    pub const fn new(max: M) -> Self {
        Self { max }
    }
}

impl<M: PartialOrd + Display + Copy + Send + Sync> Bound<M> for Max<M> {
    fn admits(&self, magnitude: M) -> bool {
        magnitude <= self.max
    }

    fn violation(&self, label: &str, key: &str, actual: M) -> String {
        format!("{label} of \"{key}\" ({actual}) can not be greater than {}", self.max)
    }

    fn describe(&self, type_name: &str, noun: Option<&str>) -> String {
        match noun {
            Some(noun) => format!("{type_name} with maximum {noun} of {}", self.max),
            None => format!("{type_name} with maximum of {}", self.max),
        }
    }
}

/// Inclusive range; both ends checked together with one combined message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<M> {
    /// Smallest accepted magnitude.
    pub min: M,
    /// Largest accepted magnitude.
    pub max: M,
}

impl<M> Range<M> {
    /// Creates the bound. A range with `min > max` admits nothing.
    pub const fn new(min: M, max: M) -> Self {
        Self { min, max }
    }
}

impl<M: PartialOrd> Range<M> {
    /// Returns `true` if at least one magnitude can satisfy the range.
    pub fn is_satisfiable(&self) -> bool {
        self.min <= self.max
    }
}

impl<M: PartialOrd + Display + Copy + Send + Sync> Bound<M> for Range<M> {
    fn admits(&self, magnitude: M) -> bool {
        magnitude >= self.min && magnitude <= self.max
    }

    fn violation(&self, label: &str, key: &str, actual: M) -> String {
        format!(
            "{label} of \"{key}\" ({actual}) must be between {} and {}",
            self.min, self.max
        )
    }

    fn describe(&self, type_name: &str, noun: Option<&str>) -> String {
        match noun {
            Some(noun) => format!(
                "{type_name} with {noun} between {} and {}",
                self.min, self.max
            ),
            None => format!("{type_name} between {} and {}", self.min, self.max),
        }
    }
}

// ============================================================================
// REFINED
// ============================================================================

/// A parent scalar narrowed by a bound on its magnitude.
///
/// The refinement keeps its parent's name, serialized form and conversions.
/// Text-based refinements can be renamed with [`Refined::named`]; integer
/// refinements always report their parent's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Refined<P, B> {
    parent: P,
    bound: B,
    name: Option<Cow<'static, str>>,
    description: Cow<'static, str>,
}

impl<P, B> Refined<P, B>
where
    P: Measurable,
    B: Bound<P::Magnitude>,
{
    /// Narrows `parent` with `bound`, generating the description.
    pub fn new(parent: P, bound: B) -> Self {
        let description = bound.describe(parent.name(), P::MAGNITUDE_NOUN);
        Self {
            parent,
            bound,
            name: None,
            description: Cow::Owned(description),
        }
    }

    /// Replaces the generated description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    /// The scalar this refinement delegates to.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The bound checked after the parent accepts.
    pub fn bound(&self) -> &B {
        &self.bound
    }
}

impl<P, B> Refined<P, B>
where
    P: TextScalar,
    B: Bound<P::Magnitude>,
{
    /// Gives the refined type its own name, e.g. `Username`.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<P, B> ScalarType for Refined<P, B>
where
    P: Measurable,
    B: Bound<P::Magnitude>,
{
    type Value = P::Value;
    type Serialized = P::Serialized;

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.parent.name())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate(&self, key: &str, input: &serde_json::Value) -> ValidationResult<serde_json::Value> {
        let accepted = match self.parent.validate(key, input) {
            ValidationResult::Success(accepted) => accepted,
            failure @ ValidationResult::Failure(_) => return failure,
        };

        let Some(actual) = self.parent.measure(&accepted) else {
            tracing::warn!(scalar = self.name(), key, "parent accepted input it cannot measure");
            return ValidationResult::failure(format!(
                "{} of \"{key}\" could not be measured",
                P::MAGNITUDE_LABEL
            ));
        };

        if self.bound.admits(actual) {
            ValidationResult::Success(accepted)
        } else {
            tracing::trace!(scalar = self.name(), key, %actual, "bound violated");
            ValidationResult::failure(self.bound.violation(P::MAGNITUDE_LABEL, key, actual))
        }
    }

    fn serialize(&self, value: &Self::Value) -> Self::Serialized {
        self.parent.serialize(value)
    }

    fn deserialize(&self, serialized: Self::Serialized) -> Result<Self::Value, ConversionError> {
        self.parent.deserialize(serialized)
    }

    fn sanitize(&self, raw: serde_json::Value) -> Result<Self::Value, ConversionError> {
        self.parent.sanitize(raw)
    }
}

impl<P, B> Measurable for Refined<P, B>
where
    P: Measurable,
    B: Bound<P::Magnitude>,
{
    type Magnitude = P::Magnitude;
    const MAGNITUDE_LABEL: &'static str = P::MAGNITUDE_LABEL;
    const MAGNITUDE_NOUN: Option<&'static str> = P::MAGNITUDE_NOUN;

    fn measure(&self, accepted: &serde_json::Value) -> Option<Self::Magnitude> {
        self.parent.measure(accepted)
    }
}

// ============================================================================
// TEXT SCALARS
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Scalars measured by length, whose refinements may be renamed.
pub trait TextScalar: Measurable<Magnitude = usize> + sealed::Sealed {}

impl sealed::Sealed for StringType {}
impl TextScalar for StringType {}

impl sealed::Sealed for IdType {}
impl TextScalar for IdType {}

impl<T: TextScalar> sealed::Sealed for NonNull<T> {}
impl<T: TextScalar> TextScalar for NonNull<T> {}

// ============================================================================
// TESTS
// ============================================================================
