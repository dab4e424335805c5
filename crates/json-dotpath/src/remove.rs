use serde_json::{Map, Value};

use crate::get::resolve_mut;
use crate::util::parse_path;
use json_dotpath_util::{clone, clone_or_empty};

fn prune<F>(val: &Value, predicate: &mut F, recursive: bool) -> Value
where
    F: FnMut(&str, &Value) -> bool,
{
    match val {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                // Children are pruned before the member itself is tested.
                let kept = if recursive {
                    prune(child, predicate, true)
                } else {
                    clone(child)
                };
                if !predicate(key, &kept) {
                    out.insert(key.clone(), kept);
                }
            }
            Value::Object(out)
        }
        Value::Array(arr) if recursive => Value::Array(
            arr.iter()
                .map(|item| prune(item, predicate, true))
                .collect(),
        ),
        other => clone(other),
    }
}

/// Drop every object member for which `predicate(key, value)` holds.
///
/// Only the top level is filtered unless `recursive` is set, in which case
/// nested objects and arrays are filtered the same way at every depth.
/// Array elements have no key of their own; they are kept and descended
/// into. In recursive mode the predicate sees each member's value after
/// its own children were pruned, so applying the same predicate twice
/// gives the same tree as once.
///
/// ```
/// use json_dotpath::remove;
/// use serde_json::json;
///
/// let doc = json!({"a": null, "b": {"c": null, "d": 1}});
/// let out = remove(&doc, |_, v| v.is_null(), true);
/// assert_eq!(out, json!({"b": {"d": 1}}));
/// ```
pub fn remove<F>(val: &Value, mut predicate: F, recursive: bool) -> Value
where
    F: FnMut(&str, &Value) -> bool,
{
    if val.is_null() {
        return clone_or_empty(val);
    }
    prune(val, &mut predicate, recursive)
}

/// Copy-on-write removal of the single value at a dot-path.
///
/// Object members are removed without disturbing the order of their
/// siblings; array elements shift down. A path that does not resolve
/// leaves the copy unchanged.
pub fn remove_at(val: &Value, path: &str) -> Value {
    let mut out = clone_or_empty(val);
    let Ok(segments) = parse_path(path) else {
        return out;
    };
    let Some((last, parents)) = segments.split_last() else {
        return out;
    };
    match resolve_mut(&mut out, parents) {
        Some(Value::Object(map)) => {
            map.shift_remove(last.key());
        }
        Some(Value::Array(arr)) => {
            if let Some(idx) = last.index().filter(|idx| *idx < arr.len()) {
                arr.remove(idx);
            }
        }
        _ => {}
    }
    out
}
