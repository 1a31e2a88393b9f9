//! Date scalar
//!
//! Accepts ISO 8601 strings and represents them as UTC instants. Inputs
//! without an offset are read as UTC; a bare calendar date means midnight.
//! Serialized output is RFC 3339 with a `Z` suffix, so an input such as
//! `2024-01-01T02:00:00+02:00` comes back as `2024-01-01T00:00:00Z`.
//!
//! Years are limited to `0000..=9999`, both as written and after the
//! conversion to UTC, since RFC 3339 output has no room for more digits.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::error::{ConversionError, json_type_name};

/// Date-time layouts carrying an explicit offset, tried after RFC 3339.
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-time layouts without an offset.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

crate::scalar! {
    /// A point in time exchanged as an ISO 8601 string.
    pub DateType {
        name: "Date",
        description: "An ISO-8601 Date.",
        value: DateTime<Utc>,
        serialized: String,
    }
    accepts(input) { input.as_str().is_some_and(|s| parse_iso8601(s).is_ok()) }
    error(key) { format!("{key} must be an ISO 8601-formatted date string.") }
    serialize(value) { value.to_rfc3339_opts(SecondsFormat::AutoSi, true) }
    deserialize(serialized) { parse_iso8601(&serialized) }
    sanitize(raw) {
        match raw {
            serde_json::Value::String(s) => parse_iso8601(&s),
            other => Err(ConversionError::TypeMismatch {
                scalar: Self::NAME.to_owned(),
                expected: "string",
                actual: json_type_name(&other),
            }),
        }
    }
}

/// Parses an ISO 8601 date or date-time into a UTC instant.
pub(crate) fn parse_iso8601(input: &str) -> Result<DateTime<Utc>, ConversionError> {
    let instant = parse_instant(input)?;
    if has_four_digit_year(input) && (0..=9999).contains(&instant.year()) {
        Ok(instant)
    } else {
        Err(ConversionError::DateOutOfRange {
            input: input.to_owned(),
        })
    }
}

/// `YYYY-` with no sign and exactly four digits.
fn has_four_digit_year(input: &str) -> bool {
    input
        .as_bytes()
        .get(..5)
        .is_some_and(|prefix| prefix[..4].iter().all(u8::is_ascii_digit) && prefix[4] == b'-')
}

fn parse_instant(input: &str) -> Result<DateTime<Utc>, ConversionError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Some(instant) = OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(input, layout).ok())
    {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
    {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|source| ConversionError::InvalidDate {
            input: input.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("2024-01-01T00:00:00Z")]
    #[case("2024-01-01T00:00:00.123456Z")]
    #[case("2024-01-01T05:30:00+05:30")]
    #[case("2024-01-01T05:30:00+0530")]
    #[case("2024-01-01T00:00:00")]
    #[case("2024-01-01 00:00:00")]
    #[case("2024-01-01T00:00")]
    #[case("2024-01-01")]
    fn accepts_iso8601(#[case] input: &str) {
        assert!(DateType::new().validate("at", &json!(input)).is_success());
    }

    #[rstest]
    #[case(json!("not-a-date"))]
    #[case(json!("2024-13-01"))]
    #[case(json!("01/02/2024"))]
    #[case(json!(1_704_067_200))]
    #[case(json!(null))]
    #[case(json!("+10000-01-01"))]
    #[case(json!("-0001-01-01T00:00:00"))]
    #[case(json!("+12345-06-07T08:09:10"))]
    #[case(json!("+2024-01-01"))]
    #[case(json!("0000-01-01T00:30:00+01:00"))]
    #[case(json!("9999-12-31T23:00:00-02:00"))]
    fn rejects_with_fixed_message(#[case] input: serde_json::Value) {
        let result = DateType::new().validate("at", &input);
        assert_eq!(
            result.errors(),
            ["at must be an ISO 8601-formatted date string."]
        );
    }

    #[test]
    fn offsets_normalize_to_utc() {
        let scalar = DateType::new();
        let value = scalar.sanitize(json!("2024-01-01T02:00:00+02:00")).unwrap();
        assert_eq!(value, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(scalar.serialize(&value), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn round_trip_keeps_the_instant() {
        let scalar = DateType::new();
        let value = scalar.sanitize(json!("2024-06-15T12:34:56.789012+03:00")).unwrap();
        let back = scalar.deserialize(scalar.serialize(&value)).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn deserialize_malformed_is_a_hard_error() {
        let err = DateType::new().deserialize("yesterday".to_owned()).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDate { .. }));
        assert!(err.to_string().starts_with("`yesterday` is not an ISO 8601 date string"));
    }

    #[rstest]
    #[case("0000-01-01T00:00:00Z")]
    #[case("9999-12-31T23:59:59.999999999Z")]
    #[case("0001-02-03")]
    fn extreme_years_round_trip(#[case] input: &str) {
        let scalar = DateType::new();
        assert!(scalar.validate("at", &json!(input)).is_success());
        let value = scalar.sanitize(json!(input)).unwrap();
        let wire = scalar.serialize(&value);
        assert!(scalar.validate("at", &json!(wire.clone())).is_success());
        assert_eq!(scalar.deserialize(wire).unwrap(), value);
    }

    #[test]
    fn deserialize_rejects_years_outside_four_digits() {
        let scalar = DateType::new();
        let err = scalar.deserialize("-0001-01-01T00:00:00".to_owned()).unwrap_err();
        assert!(matches!(err, ConversionError::DateOutOfRange { .. }));

        let err = scalar.deserialize("9999-12-31T23:00:00-02:00".to_owned()).unwrap_err();
        assert!(matches!(err, ConversionError::DateOutOfRange { .. }));

        assert!(scalar.deserialize("+10000-01-01T00:00:00Z".to_owned()).is_err());
    }

    #[test]
    fn sanitize_rejects_non_strings() {
        let err = DateType::new().sanitize(json!(5)).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::TypeMismatch { actual: "number", .. }
        ));
    }
}
