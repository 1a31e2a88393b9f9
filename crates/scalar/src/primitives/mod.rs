//! Leaf scalar types.
//!
//! Each leaf only checks the runtime shape of its input. Absence is handled
//! by the [`NonNull`](crate::NonNull) wrapper every builtin is constructed
//! with, so a bare leaf reports `null` as a shape mismatch.
//!
//! | Scalar | Value | Serialized |
//! |---|---|---|
//! | [`BooleanType`] | `bool` | `bool` |
//! | [`StringType`] | `String` | `String` |
//! | [`IdType`] | `String` | `String` |
//! | [`IntType`] | `i64` | [`serde_json::Number`] |
//! | [`FloatType`] | `f64` | `f64` |
//! | `DateType` | `DateTime<Utc>` | `String` |

mod boolean;
#[cfg(feature = "temporal")]
mod date;
mod number;
mod string;

pub use boolean::BooleanType;
#[cfg(feature = "temporal")]
pub use date::DateType;
pub use number::{FloatType, IntType};
pub use string::{IdType, StringType};
