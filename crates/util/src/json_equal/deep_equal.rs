use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// Objects compare by key set and values, ignoring key order. Arrays compare
/// element by element. Numbers compare by value, so `1` and `1.0` are equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_dotpath_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b.iter())
                    .all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) if deep_equal(val_a, val_b) => {}
                    _ => return false,
                }
            }
            true
        }

        _ => false,
    }
}

/// Returns true when `items` holds an element deep-equal to `needle`.
///
/// ```
/// use serde_json::json;
/// use json_dotpath_util::json_equal::contains_deep;
///
/// let items = vec![json!({"id": 1}), json!("x")];
/// assert!(contains_deep(&items, &json!({"id": 1})));
/// assert!(!contains_deep(&items, &json!({"id": 2})));
/// ```
pub fn contains_deep(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| deep_equal(item, needle))
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
