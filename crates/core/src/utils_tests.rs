// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::value::Value;
use proptest::prelude::*;
use serde_json::json;

fn object(json: serde_json::Value) -> ObjectRef {
    Value::from(json).as_object().cloned().unwrap()
}

#[test]
fn test_merge_later_source_wins() {
    let target = object(json!({ "a": 0, "keep": true }));
    let first = object(json!({ "a": 1, "b": 1 }));
    let second = object(json!({ "b": 2, "c": 2 }));

    let merged = merge(&target, [&first, &second]);

    assert!(merged.ptr_eq(&target));
    assert_eq!(target.get("a").as_f64(), Some(1.0));
    assert_eq!(target.get("b").as_f64(), Some(2.0));
    assert_eq!(target.get("c").as_f64(), Some(2.0));
    assert_eq!(target.get("keep").as_bool(), Some(true));
    assert_eq!(first.len(), 2);
}

#[test]
fn test_merge_skips_inherited_properties() {
    let proto = object(json!({ "inherited": 1 }));
    let source = create(&proto);
    source.set("own", 2);
    let target = ObjectRef::new();

    merge(&target, [&source]);

    assert_eq!(own_keys_sorted(&target), vec!["own"]);
}

#[test]
fn test_merge_with_no_sources() {
    let target = object(json!({ "a": 1 }));
    let merged = merge(&target, std::iter::empty());
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_create_delegates_to_prototype() {
    let proto = object(json!({ "greeting": "hi" }));
    let child = create(&proto);

    assert!(child.prototype().is_some_and(|p| p.ptr_eq(&proto)));
    assert_eq!(child.get("greeting").as_str(), Some("hi"));
    assert!(child.is_empty());

    proto.set("late", 1);
    assert_eq!(child.get("late").as_f64(), Some(1.0));
}

#[test]
fn test_own_keys_sorted() {
    assert_eq!(own_keys_sorted(&object(json!({ "b": 1, "a": 2 }))), vec!["a", "b"]);
    assert!(own_keys_sorted(&ObjectRef::new()).is_empty());
}

#[test]
fn test_own_keys_sorted_excludes_inherited() {
    let proto = object(json!({ "z": 1 }));
    let child = create(&proto);
    child.set("b", 1);
    child.set("a", 1);
    assert_eq!(own_keys_sorted(&child), vec!["a", "b"]);
}

proptest! {
    #[test]
    fn own_keys_are_sorted_and_complete(
        keys in proptest::collection::btree_set("[a-zA-Z0-9_]{1,8}", 0..12),
    ) {
        let target = ObjectRef::new();
        for key in keys.iter().rev() {
            target.set(key.clone(), 1);
        }
        let listed = own_keys_sorted(&target);
        let expected: Vec<String> = keys.into_iter().collect();
        prop_assert_eq!(listed, expected);
    }
}
