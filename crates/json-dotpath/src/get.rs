use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::convert::FromJsonValue;
use crate::types::PathSegment;
use crate::util::parse_path;
use crate::DotPathError;

/// Walk already-parsed segments. Object nodes take the segment as a key,
/// array nodes take it as an index, anything else ends the walk.
pub(crate) fn resolve<'a>(val: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    let mut current = val;
    for segment in path {
        current = match current {
            Value::Object(map) => map.get(segment.key())?,
            Value::Array(arr) => arr.get(segment.index()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`resolve`].
pub(crate) fn resolve_mut<'a>(
    val: &'a mut Value,
    path: &[PathSegment],
) -> Option<&'a mut Value> {
    let mut current = val;
    for segment in path {
        current = match current {
            Value::Object(map) => map.get_mut(segment.key())?,
            Value::Array(arr) => arr.get_mut(segment.index()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Borrow the value at a dot-path.
///
/// Returns `None` when the path is empty, malformed, or does not resolve.
/// An explicit `null` in the document resolves to `Some(&Value::Null)`.
pub fn get_value<'a>(val: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_path(path).ok()?;
    resolve(val, &segments)
}

/// Read the value at a dot-path as `T`, falling back to `default`.
///
/// The default is returned when the path does not resolve or when the
/// value found there cannot be converted to `T`.
pub fn get<T: FromJsonValue>(val: &Value, path: &str, default: T) -> T {
    get_value(val, path)
        .and_then(T::from_json_value)
        .unwrap_or(default)
}

/// Deserialize the value at a dot-path with serde.
///
/// Useful for reading whole sections into typed structs.
pub fn get_as<T: DeserializeOwned>(val: &Value, path: &str) -> Option<T> {
    let found = get_value(val, path)?;
    T::deserialize(found).ok()
}

/// Read the value at a dot-path as `T`, or fail with `NotFound`.
///
/// `message` is the error text; every `{path}` in it is replaced with the
/// requested path. An empty message produces a generic one.
pub fn get_required<T: FromJsonValue>(
    val: &Value,
    path: &str,
    message: &str,
) -> Result<T, DotPathError> {
    get_value(val, path)
        .and_then(T::from_json_value)
        .ok_or_else(|| DotPathError::NotFound(not_found_message(path, message)))
}

fn not_found_message(path: &str, message: &str) -> String {
    if message.is_empty() {
        format!("path '{path}' not found")
    } else {
        message.replace("{path}", path)
    }
}
