use serde_json::{Map, Value};

use crate::types::PathSegment;
use crate::util::{format_path, parse_path};
use crate::DotPathError;
use json_dotpath_util::clone_or_empty;

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Index for writing into an array of length `len`; `len` itself appends.
fn write_index(
    len: usize,
    segment: &PathSegment,
    path: &[PathSegment],
) -> Result<usize, DotPathError> {
    match segment.index() {
        Some(idx) if idx <= len => Ok(idx),
        Some(idx) => Err(DotPathError::InvalidArgument(format!(
            "index {idx} out of range for array of length {len} in path '{}'",
            format_path(path)
        ))),
        None => Err(DotPathError::InvalidArgument(format!(
            "segment '{}' is not an array index in path '{}'",
            segment.key(),
            format_path(path)
        ))),
    }
}

/// Descend one step for writing, creating an empty object when the step is
/// missing or holds a scalar.
fn child_for_write<'a>(
    node: &'a mut Value,
    segment: &PathSegment,
    path: &[PathSegment],
) -> Result<&'a mut Value, DotPathError> {
    let slot = match node {
        Value::Object(map) => map
            .entry(segment.key().to_string())
            .or_insert_with(empty_object),
        Value::Array(arr) => {
            let idx = write_index(arr.len(), segment, path)?;
            if idx == arr.len() {
                arr.push(empty_object());
            }
            &mut arr[idx]
        }
        other => {
            *other = empty_object();
            return child_for_write(other, segment, path);
        }
    };
    if !slot.is_object() && !slot.is_array() {
        *slot = empty_object();
    }
    Ok(slot)
}

/// Write `value` at `path` inside `root`, in place.
pub(crate) fn set_at(
    root: &mut Value,
    path: &[PathSegment],
    value: Value,
) -> Result<(), DotPathError> {
    let (last, parents) = path.split_last().ok_or_else(|| {
        DotPathError::InvalidArgument("path must not be empty".to_string())
    })?;

    let mut current = root;
    for segment in parents {
        current = child_for_write(current, segment, path)?;
    }

    match current {
        Value::Object(map) => {
            map.insert(last.key().to_string(), value);
        }
        Value::Array(arr) => {
            let idx = write_index(arr.len(), last, path)?;
            if idx == arr.len() {
                arr.push(value);
            } else {
                arr[idx] = value;
            }
        }
        other => {
            let mut map = Map::new();
            map.insert(last.key().to_string(), value);
            *other = Value::Object(map);
        }
    }
    Ok(())
}

/// Copy-on-write insert or replace of the value at a dot-path.
///
/// The input tree is cloned, missing intermediate steps are created as empty
/// objects, and the final step is set to `value`. `Value::Null` is a legal
/// value. An absent (`null`) tree starts out as `{}`.
///
/// # Errors
///
/// `InvalidArgument` when the path is empty, has an empty segment, or
/// addresses an array with something other than an index in `0..=len`.
///
/// # Example
///
/// ```
/// use json_dotpath::upsert;
/// use serde_json::json;
///
/// let doc = json!({});
/// let out = upsert(&doc, "user.address.city", json!("NYC")).unwrap();
/// assert_eq!(out, json!({"user": {"address": {"city": "NYC"}}}));
/// assert_eq!(doc, json!({}));
/// ```
pub fn upsert(val: &Value, path: &str, value: Value) -> Result<Value, DotPathError> {
    let segments = parse_path(path)?;
    let mut out = clone_or_empty(val);
    set_at(&mut out, &segments, value)?;
    Ok(out)
}

/// Apply several upserts in iteration order. Later writes win.
///
/// All paths are applied to one copy of the tree; if any write fails the
/// whole call fails and no partial result is returned.
///
/// ```
/// use json_dotpath::{upsert_many, Updates};
/// use serde_json::json;
///
/// let mut updates = Updates::new();
/// updates.insert("a.b".to_string(), json!(1));
/// updates.insert("a".to_string(), json!({"c": 2}));
/// let out = upsert_many(&json!(null), &updates).unwrap();
/// assert_eq!(out, json!({"a": {"c": 2}}));
/// ```
pub fn upsert_many<'a, I, K>(val: &Value, updates: I) -> Result<Value, DotPathError>
where
    I: IntoIterator<Item = (K, &'a Value)>,
    K: AsRef<str>,
{
    let mut out = clone_or_empty(val);
    for (path, value) in updates {
        let segments = parse_path(path.as_ref())?;
        set_at(&mut out, &segments, json_dotpath_util::clone(value))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upsert_creates_intermediates() {
        let out = upsert(&json!({}), "a.b.c", json!(1)).unwrap();
        assert_eq!(out, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_upsert_replaces_keeping_order() {
        let doc = json!({"x": 1, "y": 2, "z": 3});
        let out = upsert(&doc, "y", json!(20)).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
        assert_eq!(out["y"], json!(20));
    }

    #[test]
    fn test_upsert_null_value() {
        let out = upsert(&json!({"a": 1}), "a", Value::Null).unwrap();
        assert_eq!(out, json!({"a": null}));
    }

    #[test]
    fn test_upsert_does_not_mutate_input() {
        let doc = json!({"a": {"b": 1}});
        let _ = upsert(&doc, "a.b", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_upsert_array_element() {
        let doc = json!({"items": [{"n": 1}, {"n": 2}]});
        let out = upsert(&doc, "items.1.n", json!(5)).unwrap();
        assert_eq!(out, json!({"items": [{"n": 1}, {"n": 5}]}));
    }

    #[test]
    fn test_upsert_array_append() {
        let doc = json!({"items": [1]});
        let out = upsert(&doc, "items.1", json!(2)).unwrap();
        assert_eq!(out, json!({"items": [1, 2]}));

        let out = upsert(&doc, "items.1.name", json!("x")).unwrap();
        assert_eq!(out, json!({"items": [1, {"name": "x"}]}));
    }

    #[test]
    fn test_upsert_array_out_of_range() {
        let doc = json!({"items": [1]});
        let err = upsert(&doc, "items.5", json!(2)).unwrap_err();
        assert!(matches!(err, DotPathError::InvalidArgument(_)));
    }

    #[test]
    fn test_upsert_array_non_index() {
        let doc = json!({"items": [1]});
        assert!(upsert(&doc, "items.name", json!(2)).is_err());
    }

    #[test]
    fn test_upsert_replaces_scalar_intermediate() {
        let doc = json!({"db": "sqlite"});
        let out = upsert(&doc, "db.path", json!("/tmp/x")).unwrap();
        assert_eq!(out, json!({"db": {"path": "/tmp/x"}}));
    }

    #[test]
    fn test_upsert_null_root() {
        let out = upsert(&Value::Null, "a", json!(true)).unwrap();
        assert_eq!(out, json!({"a": true}));
    }

    #[test]
    fn test_upsert_rejects_empty_path() {
        assert!(matches!(
            upsert(&json!({}), "", json!(1)),
            Err(DotPathError::InvalidArgument(_))
        ));
        assert!(upsert(&json!({}), "a..b", json!(1)).is_err());
    }

    #[test]
    fn test_upsert_many_in_order() {
        let updates = vec![("a", json!(1)), ("b.c", json!(2)), ("a", json!(3))];
        let out = upsert_many(&json!({}), updates.iter().map(|(k, v)| (*k, v))).unwrap();
        assert_eq!(out, json!({"a": 3, "b": {"c": 2}}));
    }

    #[test]
    fn test_upsert_many_fails_whole() {
        let doc = json!({"keep": 1});
        let updates = vec![("a", json!(1)), ("", json!(2))];
        assert!(upsert_many(&doc, updates.iter().map(|(k, v)| (*k, v))).is_err());
        assert_eq!(doc, json!({"keep": 1}));
    }
}
