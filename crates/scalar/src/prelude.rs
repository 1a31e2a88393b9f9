//! Prelude module for convenient imports.
//!
//! `use lumen_scalar::prelude::*;` brings in the traits, result types,
//! builtin instances and factories.

// ============================================================================
// CORE: Traits and results
// ============================================================================

pub use crate::descriptor::{Measurable, ScalarType};
pub use crate::erased::DynScalar;
pub use crate::result::{ValidationErrors, ValidationResult};

// ============================================================================
// BUILTINS: Instances and factories
// ============================================================================

#[cfg(feature = "temporal")]
pub use crate::builtins::DATE;
pub use crate::builtins::{
    BOOLEAN, FLOAT, ID, INT, NEGATIVE_INT, NON_EMPTY_STRING, NON_NEGATIVE_INT, NON_POSITIVE_INT,
    POSITIVE_INT, STRING, int_max, int_min, int_range, string_max, string_min, string_range,
};

// ============================================================================
// COMPOSITION: Wrappers and bounds
// ============================================================================

pub use crate::non_null::NonNull;
pub use crate::refinement::{Max, Min, Range, Refined};
pub use crate::registry::ScalarRegistry;
