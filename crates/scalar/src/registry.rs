//! Keyed lookup of type-erased scalars.
//!
//! A [`ScalarRegistry`] maps lookup keys (`PositiveInt`, `Username`) to
//! shared [`DynScalar`] instances. Note that the key is not the scalar's
//! name: every integer refinement is named `Int` but is registered under
//! its own key. Registries are built once through [`ScalarRegistryBuilder`]
//! and are read-only afterwards, so lookups need no locking.
//!
//! # Examples
//!
//! ```
//! use lumen_scalar::registry::ScalarRegistry;
//! use lumen_scalar::builtins::string_range;
//! use serde_json::json;
//!
//! let registry = ScalarRegistry::builder()
//!     .with_builtins()
//!     .unwrap()
//!     .register("Username", string_range(3, 20).named("Username"))
//!     .unwrap()
//!     .build();
//!
//! let result = registry.validate("Username", "login", &json!("al")).unwrap();
//! assert_eq!(result.errors(), ["Length of \"login\" (2) must be between 3 and 20"]);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::builtins;
use crate::config::{RegistryConfig, ScalarDefinition};
use crate::erased::DynScalar;
use crate::error::RegistryError;
use crate::result::ValidationResult;

// ============================================================================
// REGISTRY
// ============================================================================

/// An immutable, insertion-ordered set of scalars keyed by lookup name.
#[derive(Debug, Clone, Default)]
pub struct ScalarRegistry {
    entries: IndexMap<String, Arc<dyn DynScalar>>,
}

impl ScalarRegistry {
    /// Starts an empty builder.
    pub fn builder() -> ScalarRegistryBuilder {
        ScalarRegistryBuilder::default()
    }

    /// Registry holding only the builtin scalars.
    ///
    /// Builtin keys are unique, so this skips the builder's duplicate check.
    pub(crate) fn builtin() -> Self {
        Self {
            entries: builtins::entries()
                .into_iter()
                .map(|(key, scalar)| (key.to_owned(), scalar))
                .collect(),
        }
    }

    /// Builds a registry from a parsed configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        if config.include_builtins {
            builder = builder.with_builtins()?;
        }
        for definition in &config.scalars {
            builder = builder.define(definition)?;
        }
        Ok(builder.build())
    }

    /// Looks up a scalar by key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn DynScalar>> {
        self.entries.get(key)
    }

    /// Looks up a scalar by key, failing with
    /// [`RegistryError::UnknownScalar`] if it is missing.
    pub fn require(&self, key: &str) -> Result<&Arc<dyn DynScalar>, RegistryError> {
        self.get(key)
            .ok_or_else(|| RegistryError::UnknownScalar(key.to_owned()))
    }

    /// Returns `true` if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered scalars.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn DynScalar>)> {
        self.entries.iter().map(|(key, scalar)| (key.as_str(), scalar))
    }

    /// Validates `input` for the field `field_key` with the scalar
    /// registered under `scalar_key`.
    pub fn validate(
        &self,
        scalar_key: &str,
        field_key: &str,
        input: &serde_json::Value,
    ) -> Result<ValidationResult<serde_json::Value>, RegistryError> {
        Ok(self.require(scalar_key)?.validate_input(field_key, input))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects entries for a [`ScalarRegistry`], rejecting duplicate keys.
#[derive(Debug, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct ScalarRegistryBuilder {
    entries: IndexMap<String, Arc<dyn DynScalar>>,
}

impl ScalarRegistryBuilder {
    /// Adds every builtin scalar under its well-known key.
    ///
    /// Fails with [`RegistryError::DuplicateScalar`] if a builtin key was
    /// already registered.
    pub fn with_builtins(self) -> Result<Self, RegistryError> {
        builtins::entries()
            .into_iter()
            .try_fold(self, |builder, (key, scalar)| builder.register_shared(key, scalar))
    }

    /// Adds a scalar under `key`.
    pub fn register(
        self,
        key: impl Into<String>,
        scalar: impl DynScalar + 'static,
    ) -> Result<Self, RegistryError> {
        self.register_shared(key, Arc::new(scalar))
    }

    /// Adds an already shared scalar under `key`.
    pub fn register_shared(
        mut self,
        key: impl Into<String>,
        scalar: Arc<dyn DynScalar>,
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateScalar(key));
        }
        tracing::trace!(key = %key, scalar = scalar.scalar_name(), "registered scalar");
        self.entries.insert(key, scalar);
        Ok(self)
    }

    /// Builds and adds the refinement described by `definition`.
    pub fn define(self, definition: &ScalarDefinition) -> Result<Self, RegistryError> {
        let scalar = definition.build()?;
        self.register_shared(definition.key.clone(), scalar)
    }

    /// Freezes the registry.
    pub fn build(self) -> ScalarRegistry {
        tracing::debug!(scalars = self.entries.len(), "scalar registry built");
        ScalarRegistry {
            entries: self.entries,
        }
    }
}
