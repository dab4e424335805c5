use serde_json::{Map, Value};

use crate::get::{get_value, resolve};
use crate::upsert::{set_at, upsert};
use crate::util::parse_path;
use crate::DotPathError;
use json_dotpath_util::{clone, clone_or_empty};

/// Copy the value at `from` to `to`.
///
/// When `from` does not resolve the tree comes back unchanged. Otherwise a
/// deep copy of the found value is upserted at `to`.
///
/// ```
/// use json_dotpath::clone_path;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 5}});
/// let out = clone_path(&doc, "a.b", "x.y").unwrap();
/// assert_eq!(out, json!({"a": {"b": 5}, "x": {"y": 5}}));
/// ```
pub fn clone_path(val: &Value, from: &str, to: &str) -> Result<Value, DotPathError> {
    match get_value(val, from) {
        Some(found) => upsert(val, to, clone(found)),
        None => Ok(clone_or_empty(val)),
    }
}

/// Build a tree holding only the values found at `paths`.
///
/// Each found value is written at the same path in a fresh object, so
/// `project(doc, ["user.name"])` yields `{"user": {"name": ...}}`. Paths
/// that do not resolve are skipped. Steps through arrays in the source
/// become object keys in the result unless an earlier path already
/// copied that array.
pub fn project<I>(val: &Value, paths: I) -> Value
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = Value::Object(Map::new());
    for path in paths {
        let Ok(segments) = parse_path(path.as_ref()) else {
            continue;
        };
        let Some(found) = resolve(val, &segments) else {
            continue;
        };
        // Paths that resolved in the source always have a slot here.
        let written = set_at(&mut out, &segments, clone(found));
        debug_assert!(written.is_ok(), "projection of '{}' failed", path.as_ref());
    }
    out
}
