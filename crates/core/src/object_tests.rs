// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::function::FunctionRef;

#[test]
fn test_set_and_get_own() {
    let object = ObjectRef::new();
    object.set("a", 1);

    assert!(object.has_own("a"));
    assert_eq!(object.get("a").as_f64(), Some(1.0));
    assert_eq!(object.get_own("a").and_then(|v| v.as_f64()), Some(1.0));
    assert_eq!(object.len(), 1);
}

#[test]
fn test_missing_property_reads_undefined() {
    let object = ObjectRef::new();
    assert!(object.get("nope").is_undefined());
    assert!(object.get_own("nope").is_none());
    assert!(!object.has("nope"));
}

#[test]
fn test_get_walks_prototype_chain() {
    let grandparent = ObjectRef::new();
    grandparent.set("deep", "gp");
    let parent = ObjectRef::with_prototype(&grandparent);
    parent.set("mid", "p");
    let child = ObjectRef::with_prototype(&parent);

    assert_eq!(child.get("deep").as_str(), Some("gp"));
    assert_eq!(child.get("mid").as_str(), Some("p"));
    assert!(child.has("deep"));
    assert!(!child.has_own("deep"));
    assert!(child.own_keys().is_empty());
}

#[test]
fn test_set_shadows_inherited_property() {
    let proto = ObjectRef::new();
    proto.set("x", 1);
    let child = ObjectRef::with_prototype(&proto);
    child.set("x", 2);

    assert_eq!(child.get("x").as_f64(), Some(2.0));
    assert_eq!(proto.get("x").as_f64(), Some(1.0));

    child.remove("x");
    assert_eq!(child.get("x").as_f64(), Some(1.0));
}

#[test]
fn test_set_prototype_rejects_loops() {
    let a = ObjectRef::new();
    let b = ObjectRef::with_prototype(&a);

    assert!(!a.set_prototype(Some(&b)));
    assert!(!a.set_prototype(Some(&a)));
    assert!(a.prototype().is_none());

    assert!(b.set_prototype(None));
    assert!(b.prototype().is_none());
}

#[test]
fn test_clone_shares_storage() {
    let object = ObjectRef::new();
    let alias = object.clone();
    alias.set("k", true);

    assert!(object.ptr_eq(&alias));
    assert_eq!(object.get("k").as_bool(), Some(true));
    assert!(!object.ptr_eq(&ObjectRef::new()));
}

#[test]
fn test_call_invokes_function_property() {
    let object = ObjectRef::new();
    object.set(
        "double",
        FunctionRef::new(|args| Value::Number(args[0].as_f64().unwrap_or(0.0) * 2.0)),
    );
    object.set("data", 1);

    assert_eq!(
        object.call("double", &[Value::from(4)]).and_then(|v| v.as_f64()),
        Some(8.0)
    );
    assert!(object.call("data", &[]).is_none());
    assert!(object.call("missing", &[]).is_none());
}

#[test]
fn test_debug_does_not_recurse_into_values() {
    let object = ObjectRef::new();
    object.set("me", object.clone());
    let rendered = format!("{object:?}");
    assert!(rendered.contains("\"me\""));
}

#[test]
fn test_weak_handle_does_not_keep_object_alive() {
    let object = ObjectRef::new();
    let weak = object.downgrade();
    assert!(weak.upgrade().is_some_and(|o| o.ptr_eq(&object)));

    drop(object);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_array_get_set_and_padding() {
    let array = ArrayRef::from_values(vec![Value::from(1)]);
    array.push(2);
    array.set(4, "x");

    assert_eq!(array.len(), 5);
    assert!(array.get(2).is_undefined());
    assert_eq!(array.get(4).as_str(), Some("x"));
    assert!(array.get(99).is_undefined());

    array.set(0, 10);
    assert_eq!(array.get(0).as_f64(), Some(10.0));
}

#[test]
fn test_array_items_is_a_snapshot() {
    let array: ArrayRef = vec![Value::from(1), Value::from(2)].into_iter().collect();
    let items = array.items();
    array.push(3);

    assert_eq!(items.len(), 2);
    assert_eq!(array.len(), 3);
}
