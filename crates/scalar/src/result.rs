//! Success/failure outcome of checking an external input against a scalar.
//!
//! A [`ValidationResult`] either carries the accepted value or a non-empty,
//! ordered list of human-readable messages. Validation failures are
//! expected and recoverable, so they are returned as data rather than as
//! `Err`; [`ValidationResult::into_result`] bridges into `?`-based code.

use std::fmt;

use smallvec::{SmallVec, smallvec};

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// A non-empty, ordered collection of validation messages.
///
/// Most failures carry exactly one message, so the first one is stored
/// inline.
///
/// # Examples
///
/// ```
/// use lumen_scalar::ValidationErrors;
///
/// let mut errors = ValidationErrors::new("first");
/// errors.push("second");
/// assert_eq!(errors.messages(), ["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: SmallVec<[String; 1]>,
}

impl ValidationErrors {
    /// Creates a collection holding a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: smallvec![message.into()],
        }
    }

    /// Builds a collection from a list of messages.
    ///
    /// Returns `None` when the list is empty, since a failure must always
    /// explain itself.
    #[must_use]
    pub fn from_messages<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: SmallVec<[String; 1]> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Appends another message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns the messages in the order they were produced.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the first message.
    #[must_use]
    pub fn first(&self) -> &str {
        // Non-empty by construction.
        &self.messages[0]
    }

    /// Number of messages; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consumes the collection, returning the owned messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages.into_vec()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of a single `validate` call.
///
/// Exactly one of value / errors is present; a success never carries
/// errors and a failure always carries at least one message.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "validation result must be checked"]
pub enum ValidationResult<T> {
    /// The input was accepted.
    Success(T),
    /// The input was rejected.
    Failure(ValidationErrors),
}

impl<T> ValidationResult<T> {
    /// Wraps an accepted value.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure with a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(ValidationErrors::new(message))
    }

    /// Returns `true` for [`ValidationResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`ValidationResult::Failure`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The accepted value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure messages; empty for a success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.messages(),
        }
    }

    /// Transforms the accepted value, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ValidationResult::Success(f(value)),
            Self::Failure(errors) => ValidationResult::Failure(errors),
        }
    }

    /// Chains another check that only runs on success.
    pub fn and_then<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> ValidationResult<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => ValidationResult::Failure(errors),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ValidationErrors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<T> From<ValidationResult<T>> for Result<T, ValidationErrors> {
    fn from(result: ValidationResult<T>) -> Self {
        result.into_result()
    }
}

impl<T> From<Result<T, ValidationErrors>> for ValidationResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(errors) => Self::Failure(errors),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_carries_no_errors() {
        let result = ValidationResult::success(42);
        assert!(result.is_success());
        assert_eq!(result.value(), Some(&42));
        assert!(result.errors().is_empty());
    }

    #[test]
    fn failure_carries_messages() {
        let result: ValidationResult<i32> = ValidationResult::failure("nope");
        assert!(result.is_failure());
        assert_eq!(result.value(), None);
        assert_eq!(result.errors(), ["nope"]);
    }

    #[test]
    fn empty_message_list_is_not_a_failure() {
        assert!(ValidationErrors::from_messages(Vec::<String>::new()).is_none());
        let errors = ValidationErrors::from_messages(["a", "b"]).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), "a");
    }

    #[test]
    fn and_then_short_circuits() {
        let failed: ValidationResult<i32> = ValidationResult::failure("first");
        let chained = failed.and_then(|_| ValidationResult::<i32>::failure("second"));
        assert_eq!(chained.errors(), ["first"]);

        let ok = ValidationResult::success(2).and_then(|v| ValidationResult::success(v * 2));
        assert_eq!(ok.value(), Some(&4));
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::new("one");
        errors.push("two");
        assert_eq!(errors.to_string(), "one; two");
    }

    #[test]
    fn into_messages_keeps_order() {
        let mut errors = ValidationErrors::new("one");
        errors.push("two");
        assert_eq!(errors.clone().into_iter().count(), 2);
        assert_eq!(errors.into_messages(), vec!["one".to_owned(), "two".to_owned()]);
    }

    #[test]
    fn into_result_round_trips() {
        let result: Result<i32, _> = ValidationResult::<i32>::failure("x").into_result();
        let back: ValidationResult<i32> = result.into();
        assert_eq!(back.errors(), ["x"]);
    }
}
