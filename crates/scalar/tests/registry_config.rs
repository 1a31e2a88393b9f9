//! Registry assembly from builtins and JSON configuration.

use lumen_scalar::builtins;
use lumen_scalar::config::{BaseScalar, RegistryConfig, ScalarDefinition};
use lumen_scalar::{RegistryError, ScalarRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;

const CONFIG: &str = r#"{
    "scalars": [
        { "base": "string", "key": "Username", "name": "Username", "min": 3, "max": 20 },
        { "base": "int", "key": "Port", "min": 1, "max": 65535, "description": "TCP port" }
    ]
}"#;

#[test]
fn builtin_registry_resolves_every_well_known_key() {
    let registry = builtins::registry();
    let expected = [
        ("Boolean", "Boolean"),
        ("String", "String"),
        ("ID", "ID"),
        ("NonEmptyString", "String"),
        ("Int", "Int"),
        ("PositiveInt", "Int"),
        ("NonNegativeInt", "Int"),
        ("NegativeInt", "Int"),
        ("NonPositiveInt", "Int"),
        ("Float", "Float"),
    ];
    for (key, name) in expected {
        assert_eq!(registry.require(key).unwrap().scalar_name(), name, "key `{key}`");
    }
    #[cfg(feature = "temporal")]
    assert_eq!(registry.require("Date").unwrap().scalar_name(), "Date");
}

#[test]
fn config_adds_custom_scalars_after_builtins() {
    let config = RegistryConfig::from_json_str(CONFIG).unwrap();
    let registry = ScalarRegistry::from_config(&config).unwrap();

    assert_eq!(registry.len(), builtins::registry().len() + 2);
    let keys: Vec<&str> = registry.keys().collect();
    assert_eq!(&keys[keys.len() - 2..], ["Username", "Port"]);

    let username = registry.require("Username").unwrap();
    assert_eq!(username.scalar_name(), "Username");
    let port = registry.require("Port").unwrap();
    assert_eq!(port.scalar_name(), "Int");
    assert_eq!(port.scalar_description(), "TCP port");

    let result = registry.validate("Port", "port", &json!(70000)).unwrap();
    assert_eq!(result.errors(), ["Value of \"port\" (70000) must be between 1 and 65535"]);
}

#[test]
fn builtins_can_be_left_out() {
    let config = RegistryConfig {
        include_builtins: false,
        scalars: vec![ScalarDefinition {
            key: "Percent".into(),
            base: BaseScalar::Int,
            name: None,
            description: None,
            min: Some(0),
            max: Some(100),
        }],
    };
    let registry = ScalarRegistry::from_config(&config).unwrap();
    assert_eq!(registry.keys().collect::<Vec<_>>(), ["Percent"]);
    assert!(!registry.contains("Int"));
}

#[test]
fn duplicate_definitions_are_rejected() {
    let config = RegistryConfig::from_json_str(
        r#"{ "include_builtins": false, "scalars": [
            { "base": "int", "key": "Port", "min": 1 },
            { "base": "int", "key": "Port", "max": 9 }
        ] }"#,
    )
    .unwrap();
    let err = ScalarRegistry::from_config(&config).unwrap_err();
    assert_eq!(err.to_string(), "scalar `Port` is already registered");
}

#[test]
fn custom_definitions_cannot_shadow_builtins() {
    let config = RegistryConfig::from_json_str(
        r#"{ "scalars": [{ "base": "int", "key": "PositiveInt", "min": 5 }] }"#,
    )
    .unwrap();
    let err = ScalarRegistry::from_config(&config).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateScalar(key) if key == "PositiveInt"));
}

#[test]
fn inverted_bounds_are_rejected() {
    let config = RegistryConfig::from_json_str(
        r#"{ "scalars": [{ "base": "string", "key": "Code", "min": 8, "max": 4 }] }"#,
    )
    .unwrap();
    let err = ScalarRegistry::from_config(&config).unwrap_err();
    assert!(matches!(err, RegistryError::InvertedBounds { .. }));
}

#[test]
fn malformed_json_is_reported() {
    let err = RegistryConfig::from_json_str("{ scalars: [] }").unwrap_err();
    assert!(err.to_string().starts_with("invalid scalar configuration:"));
}

#[test]
fn definitions_round_trip_through_serde() {
    let config = RegistryConfig::from_json_str(CONFIG).unwrap();
    let reparsed: RegistryConfig =
        serde_json::from_value(serde_json::to_value(&config).unwrap()).unwrap();
    assert_eq!(reparsed, config);
}
