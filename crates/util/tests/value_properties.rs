use json_dotpath_util::{clone, clone_or_empty, contains_deep, deep_equal};
use proptest::prelude::*;
use serde_json::{json, Value};

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::vec(("[a-d]", inner), 0..3)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn clone_is_deep_equal(v in value()) {
        let copy = clone(&v);
        prop_assert!(deep_equal(&v, &copy));
        prop_assert_eq!(&v, &copy);
    }

    #[test]
    fn deep_equal_is_symmetric(a in value(), b in value()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }

    #[test]
    fn clone_or_empty_never_null(v in value()) {
        let copy = clone_or_empty(&v);
        prop_assert!(!copy.is_null());
        if !v.is_null() {
            prop_assert_eq!(copy, v);
        }
    }

    #[test]
    fn contained_after_push(items in prop::collection::vec(value(), 0..4), v in value()) {
        let mut items = items;
        items.push(clone(&v));
        prop_assert!(contains_deep(&items, &v));
    }
}

#[test]
fn absent_root_clones_to_empty_object() {
    assert_eq!(clone_or_empty(&Value::Null), json!({}));
    assert_eq!(clone_or_empty(&json!({"k": null})), json!({"k": null}));
}
