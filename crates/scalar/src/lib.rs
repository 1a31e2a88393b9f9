//! # lumen-scalar
//!
//! Scalar type descriptors for a schema layer: named leaf types that
//! validate untyped JSON input and convert it between an internal value
//! and a wire form.
//!
//! ## Quick Start
//!
//! ```
//! use lumen_scalar::prelude::*;
//! use serde_json::json;
//!
//! assert!(BOOLEAN.validate("enabled", &json!(true)).is_success());
//! assert_eq!(
//!     POSITIVE_INT.validate("count", &json!(0)).errors(),
//!     ["Value of \"count\" (0) can not be lower than 1"],
//! );
//!
//! let username = string_range(3, 20).named("Username");
//! assert_eq!(username.name(), "Username");
//! ```
//!
//! ## Layout
//!
//! - [`ScalarType`] is the typed contract; [`DynScalar`] is its
//!   object-safe counterpart.
//! - [`primitives`] holds the leaf types; every builtin wraps one in
//!   [`NonNull`].
//! - [`Refined`] narrows a parent with a [`Min`], [`Max`] or [`Range`]
//!   bound.
//! - [`builtins`] exposes the ready-made instances and factories.
//! - [`ScalarRegistry`] looks scalars up by key and can be loaded from a
//!   [`config::RegistryConfig`].
//!
//! ## Features
//!
//! - `temporal` (default): the `Date` scalar, backed by `chrono`.

pub mod builtins;
pub mod config;
pub mod descriptor;
pub mod erased;
pub mod error;
mod macros;
pub mod non_null;
pub mod prelude;
pub mod primitives;
pub mod refinement;
pub mod registry;
pub mod result;

pub use descriptor::{Measurable, ScalarType};
pub use erased::DynScalar;
pub use error::{ConversionError, RegistryError};
pub use non_null::NonNull;
pub use refinement::{Bound, Max, Min, Range, Refined, TextScalar};
pub use registry::{ScalarRegistry, ScalarRegistryBuilder};
pub use result::{ValidationErrors, ValidationResult};
