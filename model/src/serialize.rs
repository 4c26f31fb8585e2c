//! Canonical JSON rendering.
//!
//! Every document goes through the same steps: build the entity's
//! [`JsonView`], drop empty fields with [`prune_empty`], render compact JSON.
//! Consumers must treat an absent field and an empty one as the same thing,
//! so `"results": []` is never written.

use serde_json::Value;

use crate::JsonView;

/// Builds the canonical JSON value of an entity.
pub fn to_value<T: JsonView + ?Sized>(entity: &T) -> Value {
    prune_empty(Value::Object(entity.json_view()))
}

/// Renders an entity as canonical compact JSON text.
pub fn to_json_string<T: JsonView + ?Sized>(entity: &T) -> String {
    to_value(entity).to_string()
}

/// Removes empty fields from every object in the tree.
///
/// An object member is dropped when its value is `null`, `false`, zero, the
/// empty string or the empty array. Nested objects are entity views and are
/// kept even when they end up empty. Array elements are never dropped.
pub fn prune_empty(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, member)| !is_falsy(member))
                .map(|(key, member)| (key, prune_empty(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_empty).collect()),
        other => other,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
