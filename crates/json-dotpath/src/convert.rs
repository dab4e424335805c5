//! Lenient conversions from JSON values to Rust types.
//!
//! A read through [`crate::get`] asks for a concrete type and falls back to
//! the caller's default whenever the conversion returns `None`.

use serde_json::{Map, Value};

/// Total conversion from a borrowed JSON value.
pub trait FromJsonValue: Sized {
    /// Returns `None` when `value` cannot represent `Self`.
    fn from_json_value(value: &Value) -> Option<Self>;
}

impl FromJsonValue for Value {
    fn from_json_value(value: &Value) -> Option<Self> {
        Some(json_dotpath_util::clone(value))
    }
}

impl FromJsonValue for String {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl FromJsonValue for bool {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

impl FromJsonValue for f64 {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}

impl FromJsonValue for f32 {
    fn from_json_value(value: &Value) -> Option<Self> {
        let wide = f64::from_json_value(value)?;
        let narrow = wide as f32;
        narrow.is_finite().then_some(narrow)
    }
}

/// Widest integer view of a value; integral floats and numeric strings count.
fn to_i128(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(i128::from(u))
            } else {
                n.as_f64().and_then(integral_f64)
            }
        }
        Value::String(s) => s
            .parse::<i128>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(integral_f64)),
        _ => None,
    }
}

fn integral_f64(f: f64) -> Option<i128> {
    // 2^64 bounds every target type below.
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < LIMIT {
        Some(f as i128)
    } else {
        None
    }
}

macro_rules! impl_from_json_int {
    ($($t:ty),*) => {
        $(
            impl FromJsonValue for $t {
                fn from_json_value(value: &Value) -> Option<Self> {
                    to_i128(value).and_then(|n| <$t>::try_from(n).ok())
                }
            }
        )*
    };
}

impl_from_json_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: FromJsonValue> FromJsonValue for Vec<T> {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(arr) => arr.iter().map(T::from_json_value).collect(),
            _ => None,
        }
    }
}

impl FromJsonValue for Map<String, Value> {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.clone()),
            _ => None,
        }
    }
}

impl<T: FromJsonValue> FromJsonValue for Option<T> {
    fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_json_value(other).map(Some),
        }
    }
}
