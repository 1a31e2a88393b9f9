//! Ready-made scalar instances and refinement factories.
//!
//! Every builtin is wrapped in [`NonNull`], so `null` is rejected unless an
//! outer nullable layer is added. Plain scalars are `static` values; the
//! refined ones build their description once on first use and are never
//! mutated afterwards.
//!
//! | Instance | Name | Accepts |
//! |---|---|---|
//! | [`BOOLEAN`] | `Boolean` | booleans |
//! | [`STRING`] | `String` | strings |
//! | [`ID`] | `ID` | strings |
//! | [`NON_EMPTY_STRING`] | `String` | strings of length ≥ 1 |
//! | [`INT`] | `Int` | integers |
//! | [`POSITIVE_INT`] | `Int` | integers ≥ 1 |
//! | [`NON_NEGATIVE_INT`] | `Int` | integers ≥ 0 |
//! | [`NEGATIVE_INT`] | `Int` | integers ≤ -1 |
//! | [`NON_POSITIVE_INT`] | `Int` | integers ≤ 0 |
//! | [`FLOAT`] | `Float` | floats |
//! | `DATE` | `Date` | ISO 8601 strings |

use std::sync::{Arc, LazyLock};

use crate::erased::DynScalar;
use crate::non_null::NonNull;
use crate::primitives::{BooleanType, FloatType, IdType, IntType, StringType};
use crate::refinement::{Max, Min, Range, Refined};
use crate::registry::ScalarRegistry;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Non-null boolean.
pub type BooleanScalar = NonNull<BooleanType>;
/// Non-null string.
pub type StringScalar = NonNull<StringType>;
/// Non-null identifier.
pub type IdScalar = NonNull<IdType>;
/// Non-null integer.
pub type IntScalar = NonNull<IntType>;
/// Non-null float.
pub type FloatScalar = NonNull<FloatType>;
/// Non-null date.
#[cfg(feature = "temporal")]
pub type DateScalar = NonNull<crate::primitives::DateType>;

/// String with a minimum length.
pub type StringMin = Refined<StringScalar, Min<usize>>;
/// String with a maximum length.
pub type StringMax = Refined<StringScalar, Max<usize>>;
/// String with a length range.
pub type StringRange = Refined<StringScalar, Range<usize>>;
/// Integer with a minimum value.
pub type IntMin = Refined<IntScalar, Min<i64>>;
/// Integer with a maximum value.
pub type IntMax = Refined<IntScalar, Max<i64>>;
/// Integer within a range.
pub type IntRange = Refined<IntScalar, Range<i64>>;

// ============================================================================
// SINGLETONS
// ============================================================================

/// `true` or `false`.
pub static BOOLEAN: BooleanScalar = NonNull::new(BooleanType::new());

/// Any string.
pub static STRING: StringScalar = NonNull::new(StringType::new());

/// An opaque identifier.
pub static ID: IdScalar = NonNull::new(IdType::new());

/// Any signed 64-bit integer.
pub static INT: IntScalar = NonNull::new(IntType::new());

/// Any float-shaped number.
pub static FLOAT: FloatScalar = NonNull::new(FloatType::new());

/// An ISO 8601 point in time.
#[cfg(feature = "temporal")]
pub static DATE: DateScalar = NonNull::new(crate::primitives::DateType::new());

/// A string with at least one character.
pub static NON_EMPTY_STRING: LazyLock<StringMin> = LazyLock::new(|| string_min(1));

/// An integer ≥ 1.
pub static POSITIVE_INT: LazyLock<IntMin> = LazyLock::new(|| int_min(1));

/// An integer ≥ 0.
pub static NON_NEGATIVE_INT: LazyLock<IntMin> = LazyLock::new(|| int_min(0));

/// An integer ≤ -1.
pub static NEGATIVE_INT: LazyLock<IntMax> = LazyLock::new(|| int_max(-1));

/// An integer ≤ 0.
pub static NON_POSITIVE_INT: LazyLock<IntMax> = LazyLock::new(|| int_max(0));

// ============================================================================
// FACTORIES
// ============================================================================

/// String of at least `min` characters.
#[must_use]
pub fn string_min(min: usize) -> StringMin {
    Refined::new(NonNull::new(StringType::new()), Min::new(min))
}

/// String of at most `max` characters.
#[must_use]
pub fn string_max(max: usize) -> StringMax {
    Refined::new(NonNull::new(StringType::new()), Max::new(max))
}

/// String of `min..=max` characters.
#[must_use]
pub fn string_range(min: usize, max: usize) -> StringRange {
    Refined::new(NonNull::new(StringType::new()), Range::new(min, max))
}

/// Integer ≥ `min`.
#[must_use]
pub fn int_min(min: i64) -> IntMin {
    Refined::new(NonNull::new(IntType::new()), Min::new(min))
}

/// Integer ≤ `max`.
#[must_use]
pub fn int_max(max: i64) -> IntMax {
    Refined::new(NonNull::new(IntType::new()), Max::new(max))
}

/// Integer in `min..=max`.
#[must_use]
pub fn int_range(min: i64, max: i64) -> IntRange {
    Refined::new(NonNull::new(IntType::new()), Range::new(min, max))
}

// ============================================================================
// REGISTRY
// ============================================================================

static REGISTRY: LazyLock<ScalarRegistry> = LazyLock::new(ScalarRegistry::builtin);

/// Process-wide registry of the builtin instances, keyed by their
/// well-known names (`Boolean`, `PositiveInt`, ...).
pub fn registry() -> &'static ScalarRegistry {
    &REGISTRY
}

/// The builtin instances paired with their lookup keys, in table order.
pub(crate) fn entries() -> Vec<(&'static str, Arc<dyn DynScalar>)> {
    fn entry<S: DynScalar + 'static>(key: &'static str, scalar: S) -> (&'static str, Arc<dyn DynScalar>) {
        let scalar: Arc<dyn DynScalar> = Arc::new(scalar);
        (key, scalar)
    }

    let mut entries = vec![
        entry("Boolean", BOOLEAN.clone()),
        entry("String", STRING.clone()),
        entry("ID", ID.clone()),
        entry("NonEmptyString", NON_EMPTY_STRING.clone()),
        entry("Int", INT.clone()),
        entry("PositiveInt", POSITIVE_INT.clone()),
        entry("NonNegativeInt", NON_NEGATIVE_INT.clone()),
        entry("NegativeInt", NEGATIVE_INT.clone()),
        entry("NonPositiveInt", NON_POSITIVE_INT.clone()),
        entry("Float", FLOAT.clone()),
    ];
    #[cfg(feature = "temporal")]
    entries.push(entry("Date", DATE.clone()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builtin_names() {
        assert_eq!(BOOLEAN.name(), "Boolean");
        assert_eq!(STRING.name(), "String");
        assert_eq!(ID.name(), "ID");
        assert_eq!(INT.name(), "Int");
        assert_eq!(FLOAT.name(), "Float");
        assert_eq!(NON_EMPTY_STRING.name(), "String");
        assert_eq!(POSITIVE_INT.name(), "Int");
        assert_eq!(NEGATIVE_INT.name(), "Int");
    }

    #[test]
    fn sign_bounds() {
        assert!(POSITIVE_INT.validate("n", &json!(1)).is_success());
        assert!(POSITIVE_INT.validate("n", &json!(0)).is_failure());
        assert!(NON_NEGATIVE_INT.validate("n", &json!(0)).is_success());
        assert!(NON_NEGATIVE_INT.validate("n", &json!(-1)).is_failure());
        assert!(NEGATIVE_INT.validate("n", &json!(-1)).is_success());
        assert!(NEGATIVE_INT.validate("n", &json!(0)).is_failure());
        assert!(NON_POSITIVE_INT.validate("n", &json!(0)).is_success());
        assert!(NON_POSITIVE_INT.validate("n", &json!(1)).is_failure());
    }

    #[test]
    fn non_empty_string() {
        assert_eq!(
            NON_EMPTY_STRING.validate("s", &json!("")).errors(),
            ["Length of \"s\" (0) can not be lower than 1"]
        );
        assert!(NON_EMPTY_STRING.validate("s", &json!("x")).is_success());
    }

    #[test]
    fn factory_descriptions() {
        assert_eq!(int_min(5).description(), "Int with minimum of 5");
        assert_eq!(int_max(7).description(), "Int with maximum of 7");
        assert_eq!(int_range(1, 3).description(), "Int between 1 and 3");
        assert_eq!(string_max(20).description(), "String with maximum length of 20");
        assert_eq!(
            int_min(5).with_description("Age in years.").description(),
            "Age in years."
        );
    }

    #[test]
    fn builtin_keys_are_unique() {
        let built = ScalarRegistry::builder().with_builtins().unwrap().build();
        assert_eq!(built.len(), entries().len());
        assert!(built.keys().eq(registry().keys()));
    }

    #[test]
    fn builtin_registry_has_every_entry() {
        let keys: Vec<&str> = registry().keys().collect();
        assert_eq!(&keys[..10], [
            "Boolean",
            "String",
            "ID",
            "NonEmptyString",
            "Int",
            "PositiveInt",
            "NonNegativeInt",
            "NegativeInt",
            "NonPositiveInt",
            "Float",
        ]);
    }
}
