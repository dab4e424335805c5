use serde_json::Value;

use json_dotpath_util::{clone, clone_or_empty, contains_deep};

/// Append `other` to `target`, keeping the first occurrence of every
/// deep-equal element. Duplicates already in `target` collapse too.
fn union_into(target: &mut Vec<Value>, other: &[Value]) {
    let mut out: Vec<Value> = Vec::with_capacity(target.len() + other.len());
    for item in target.drain(..).chain(other.iter().map(clone)) {
        if !contains_deep(&out, &item) {
            out.push(item);
        }
    }
    *target = out;
}

fn merge_into(target: &mut Value, other: &Value, merge_arrays: bool) {
    match (target, other) {
        (Value::Object(dst), Value::Object(src)) => {
            for (key, incoming) in src {
                match dst.get_mut(key) {
                    Some(existing) => merge_into(existing, incoming, merge_arrays),
                    None => {
                        dst.insert(key.clone(), clone(incoming));
                    }
                }
            }
        }
        (Value::Array(dst), Value::Array(src)) if merge_arrays => union_into(dst, src),
        (dst, src) => *dst = clone(src),
    }
}

/// Deep-merge `other` into a copy of `source`.
///
/// Keys only in `other` are added. Objects on both sides merge recursively.
/// Arrays on both sides become their set union when `merge_arrays` is set;
/// any other conflict, including arrays without `merge_arrays`, takes the
/// value from `other`. An absent (`null`) `source` is treated as `{}` and an
/// absent `other` merges nothing.
///
/// ```
/// use json_dotpath::merge;
/// use serde_json::json;
///
/// let base = json!({"log": {"level": "info"}, "tags": ["a"]});
/// let layer = json!({"log": {"file": "app.log"}, "tags": ["a", "b"]});
///
/// assert_eq!(
///     merge(&base, &layer, true),
///     json!({"log": {"level": "info", "file": "app.log"}, "tags": ["a", "b"]})
/// );
/// ```
pub fn merge(source: &Value, other: &Value, merge_arrays: bool) -> Value {
    let mut out = clone_or_empty(source);
    if !other.is_null() {
        merge_into(&mut out, other, merge_arrays);
    }
    out
}
