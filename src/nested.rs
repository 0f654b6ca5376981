use serde_json::Value;

use crate::error::{ClientError, Result};

/// Walk `path` through nested JSON objects and return the value at the end.
///
/// Fails with [`ClientError::MissingField`] when a key is absent or an
/// intermediate value is not an object. The reported field is the dotted path
/// up to and including the key that could not be resolved.
pub fn access_nested_map<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;

    for (depth, key) in path.iter().enumerate() {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| ClientError::MissingField {
                field: path[..=depth].join("."),
            })?;
    }

    Ok(current)
}
