//! String and ID scalars
//!
//! Both accept any JSON string. `ID` only differs by name: it marks values
//! meant as opaque identifiers rather than human-readable text.

use crate::Measurable;

crate::scalar! {
    /// A UTF-8 character sequence.
    pub StringType {
        name: "String",
        description: "A character sequence.",
        value: String,
        serialized: String,
    }
    accepts(input) { input.is_string() }
    error(key) { format!("Expected \"{key}\" to be a string.") }
    serialize(value) { value.clone() }
    deserialize(serialized) { Ok(serialized) }
}

crate::scalar! {
    /// An opaque identifier, serialized as a string.
    pub IdType {
        name: "ID",
        description: "A unique identifier.",
        value: String,
        serialized: String,
    }
    accepts(input) { input.is_string() }
    error(key) { format!("Expected \"{key}\" to be a string.") }
    serialize(value) { value.clone() }
    deserialize(serialized) { Ok(serialized) }
}

/// Length in Unicode scalar values.
fn char_length(accepted: &serde_json::Value) -> Option<usize> {
    accepted.as_str().map(|s| s.chars().count())
}

impl Measurable for StringType {
    type Magnitude = usize;
    const MAGNITUDE_LABEL: &'static str = "Length";
    const MAGNITUDE_NOUN: Option<&'static str> = Some("length");

    fn measure(&self, accepted: &serde_json::Value) -> Option<usize> {
        char_length(accepted)
    }
}

impl Measurable for IdType {
    type Magnitude = usize;
    const MAGNITUDE_LABEL: &'static str = "Length";
    const MAGNITUDE_NOUN: Option<&'static str> = Some("length");

    fn measure(&self, accepted: &serde_json::Value) -> Option<usize> {
        char_length(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(42))]
    #[case(json!(true))]
    #[case(json!(null))]
    #[case(json!({"s": "x"}))]
    fn string_rejects_non_strings(#[case] input: serde_json::Value) {
        let result = StringType::new().validate("title", &input);
        assert_eq!(result.errors(), ["Expected \"title\" to be a string."]);
    }

    #[test]
    fn string_accepts_strings() {
        let result = StringType::new().validate("title", &json!(""));
        assert!(result.is_success());
    }

    #[test]
    fn id_is_a_distinct_name() {
        assert_eq!(IdType::new().name(), "ID");
        assert_eq!(StringType::new().name(), "String");
        assert!(IdType::new().validate("id", &json!("a1b2")).is_success());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert_eq!(StringType::new().measure(&json!("héllo")), Some(5));
        assert_eq!(IdType::new().measure(&json!("日本")), Some(2));
        assert_eq!(StringType::new().measure(&json!(5)), None);
    }

    #[test]
    fn round_trips() {
        let scalar = StringType::new();
        let value = scalar.sanitize(json!("hello")).unwrap();
        assert_eq!(scalar.deserialize(scalar.serialize(&value)).unwrap(), "hello");
    }
}
