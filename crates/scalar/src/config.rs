//! Declarative scalar definitions.
//!
//! Refinements can be described in JSON instead of code and loaded into a
//! [`ScalarRegistry`](crate::registry::ScalarRegistry):
//!
//! ```json
//! {
//!   "include_builtins": true,
//!   "scalars": [
//!     { "base": "string", "key": "Username", "name": "Username", "min": 3, "max": 20 },
//!     { "base": "int", "key": "Port", "min": 1, "max": 65535, "description": "TCP port" }
//!   ]
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use lumen_scalar::config::RegistryConfig;
//! use lumen_scalar::registry::ScalarRegistry;
//! use serde_json::json;
//!
//! let config = RegistryConfig::from_json_str(
//!     r#"{ "scalars": [{ "base": "int", "key": "Port", "min": 1, "max": 65535 }] }"#,
//! )
//! .unwrap();
//! let registry = ScalarRegistry::from_config(&config).unwrap();
//!
//! assert!(registry.contains("Boolean"));
//! let port = registry.require("Port").unwrap();
//! assert_eq!(port.scalar_description(), "Int between 1 and 65535");
//! assert!(port.validate_input("port", &json!(0)).is_failure());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::builtins::{int_max, int_min, int_range, string_max, string_min, string_range};
use crate::erased::DynScalar;
use crate::error::RegistryError;

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Seed the registry with the builtin scalars.
    #[serde(default = "default_include_builtins")]
    pub include_builtins: bool,

    /// Custom refinements, registered in order after the builtins.
    #[serde(default)]
    pub scalars: Vec<ScalarDefinition>,
}

fn default_include_builtins() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtins: default_include_builtins(),
            scalars: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The primitive a definition refines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseScalar {
    /// Bounds apply to the character count.
    String,
    /// Bounds apply to the value.
    Int,
}

/// One refinement of `string` or `int`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarDefinition {
    /// Lookup key in the registry.
    pub key: String,
    /// The refined primitive.
    pub base: BaseScalar,
    /// Type name; only string refinements may set it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the generated description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl ScalarDefinition {
    /// Checks the definition and builds its scalar.
    pub fn build(&self) -> Result<Arc<dyn DynScalar>, RegistryError> {
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(RegistryError::InvertedBounds {
                key: self.key.clone(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        let scalar = match self.base {
            BaseScalar::String => self.build_string()?,
            BaseScalar::Int => self.build_int()?,
        };
        tracing::debug!(
            key = %self.key,
            name = scalar.scalar_name(),
            description = scalar.scalar_description(),
            "defined custom scalar"
        );
        Ok(scalar)
    }

    fn build_string(&self) -> Result<Arc<dyn DynScalar>, RegistryError> {
        let min = self.length(self.min)?;
        let max = self.length(self.max)?;

        macro_rules! finish {
            ($refined:expr) => {{
                let mut refined = $refined;
                if let Some(name) = &self.name {
                    refined = refined.named(name.clone());
                }
                if let Some(description) = &self.description {
                    refined = refined.with_description(description.clone());
                }
                let scalar: Arc<dyn DynScalar> = Arc::new(refined);
                scalar
            }};
        }

        Ok(match (min, max) {
            (Some(min), Some(max)) => finish!(string_range(min, max)),
            (Some(min), None) => finish!(string_min(min)),
            (None, Some(max)) => finish!(string_max(max)),
            (None, None) => return Err(RegistryError::EmptyBounds(self.key.clone())),
        })
    }

    fn build_int(&self) -> Result<Arc<dyn DynScalar>, RegistryError> {
        if self.name.is_some() {
            return Err(RegistryError::RenamedInt(self.key.clone()));
        }

        macro_rules! finish {
            ($refined:expr) => {{
                let mut refined = $refined;
                if let Some(description) = &self.description {
                    refined = refined.with_description(description.clone());
                }
                let scalar: Arc<dyn DynScalar> = Arc::new(refined);
                scalar
            }};
        }

        Ok(match (self.min, self.max) {
            (Some(min), Some(max)) => finish!(int_range(min, max)),
            (Some(min), None) => finish!(int_min(min)),
            (None, Some(max)) => finish!(int_max(max)),
            (None, None) => return Err(RegistryError::EmptyBounds(self.key.clone())),
        })
    }

    fn length(&self, bound: Option<i64>) -> Result<Option<usize>, RegistryError> {
        bound
            .map(|bound| {
                usize::try_from(bound).map_err(|_| RegistryError::NegativeLength {
                    key: self.key.clone(),
                    bound,
                })
            })
            .transpose()
    }
}
