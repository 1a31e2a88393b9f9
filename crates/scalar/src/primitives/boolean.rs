//! Boolean scalar

crate::scalar! {
    /// A `true` / `false` value.
    pub BooleanType {
        name: "Boolean",
        description: "A value indicating whether a condition is true or false.",
        value: bool,
        serialized: bool,
    }
    accepts(input) { input.is_boolean() }
    error(key) { format!("Expected \"{key}\" to be a boolean.") }
    serialize(value) { *value }
    deserialize(serialized) { Ok(serialized) }
}
