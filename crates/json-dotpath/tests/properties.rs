use json_dotpath::{get, get_value, merge, remove, upsert};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-c0-2]"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-50i64..50).prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key(), inner), 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn tree() -> impl Strategy<Value = Value> {
    prop::collection::vec((key(), value()), 0..5)
        .prop_map(|members| Value::Object(members.into_iter().collect()))
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(key(), 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn missing_path_yields_default(t in tree(), p in path()) {
        prop_assume!(get_value(&t, &p).is_none());
        prop_assert_eq!(get(&t, &p, json!("fallback")), json!("fallback"));
    }

    #[test]
    fn upsert_then_get_round_trips(t in tree(), p in path(), v in value()) {
        if let Ok(out) = upsert(&t, &p, v.clone()) {
            prop_assert_eq!(get(&out, &p, Value::Null), v);
        }
    }

    #[test]
    fn upsert_leaves_input_untouched(t in tree(), p in path(), v in value()) {
        let before = t.clone();
        let _ = upsert(&t, &p, v);
        prop_assert_eq!(t, before);
    }

    #[test]
    fn remove_is_idempotent(t in tree(), recursive in any::<bool>()) {
        let pred = |k: &str, v: &Value| k.starts_with('a') || v.is_null();
        let once = remove(&t, pred, recursive);
        let twice = remove(&once, pred, recursive);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_hollow_members_is_idempotent(t in tree(), recursive in any::<bool>()) {
        let hollow = |_: &str, v: &Value| match v {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            _ => false,
        };
        let once = remove(&t, hollow, recursive);
        let twice = remove(&once, hollow, recursive);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_arrays_is_a_set_union(
        a in prop::collection::vec(0i64..6, 0..8),
        b in prop::collection::vec(0i64..6, 0..8),
    ) {
        let out = merge(&json!(a), &json!(b), true);
        let items: Vec<i64> = out
            .as_array()
            .expect("array")
            .iter()
            .map(|v| v.as_i64().expect("int"))
            .collect();
        for (i, x) in items.iter().enumerate() {
            prop_assert!(!items[i + 1..].contains(x));
        }
        for x in a.iter().chain(b.iter()) {
            prop_assert!(items.contains(x));
        }
    }

    #[test]
    fn merge_without_union_takes_other_on_conflict(
        t in tree(),
        k in key(),
        v in leaf(),
    ) {
        let mut other = Map::new();
        other.insert(k.clone(), v.clone());
        let out = merge(&t, &Value::Object(other), false);
        prop_assert_eq!(&out[k.as_str()], &v);
    }
}
