use serde_json::{Map, Value};

/// Returns a new map holding every key of `defaults`, overwritten by every
/// key of `overrides`. Nested values are copied whole, not merged.
pub fn simple_extend(
    defaults: &Map<String, Value>,
    overrides: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Same as [`simple_extend`] but takes ownership and moves the values.
pub fn extend_owned(
    mut defaults: Map<String, Value>,
    overrides: Map<String, Value>,
) -> Map<String, Value> {
    defaults.extend(overrides);
    defaults
}

/// [`simple_extend`] for arbitrary values. A side that is not an object
/// contributes no keys.
pub fn extend_values(defaults: &Value, overrides: &Value) -> Value {
    let empty = Map::new();
    let defaults = defaults.as_object().unwrap_or(&empty);
    let overrides = overrides.as_object().unwrap_or(&empty);
    Value::Object(simple_extend(defaults, overrides))
}
