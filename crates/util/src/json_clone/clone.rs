use serde_json::{Map, Value};

/// Creates a deep, structural copy of a JSON tree.
///
/// Every object and array is rebuilt, so the returned tree shares no
/// storage with `value`. Object key order is preserved.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_dotpath_util::json_clone::clone;
///
/// let original = json!({"server": {"ports": [80, 443]}});
/// let copy = clone(&original);
/// assert_eq!(original, copy);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut copy = Map::with_capacity(obj.len());
            for (key, val) in obj {
                copy.insert(key.clone(), clone(val));
            }
            Value::Object(copy)
        }
    }
}

/// Like [`clone`], but an absent (`null`) root comes back as an empty object.
///
/// Every accessor operation treats a missing tree as `{}`; this is the single
/// place where that rule lives.
///
/// ```
/// use serde_json::json;
/// use json_dotpath_util::json_clone::clone_or_empty;
///
/// assert_eq!(clone_or_empty(&json!(null)), json!({}));
/// assert_eq!(clone_or_empty(&json!([1])), json!([1]));
/// ```
pub fn clone_or_empty(value: &Value) -> Value {
    match value {
        Value::Null => Value::Object(Map::new()),
        other => clone(other),
    }
}
