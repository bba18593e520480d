// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::object::ObjectRef;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_call_passes_arguments() {
    let add = FunctionRef::named("add", |args| {
        Value::Number(args.iter().filter_map(Value::as_f64).sum())
    });
    let result = add.call(&[Value::from(1), Value::from(2), Value::from(3)]);
    assert_eq!(result.as_f64(), Some(6.0));
}

#[test]
fn test_returning_clones_value() {
    let f = FunctionRef::returning("ok");
    assert_eq!(f.call(&[]).as_str(), Some("ok"));
    assert_eq!(f.call(&[Value::Null]).as_str(), Some("ok"));
}

#[test]
fn test_noop_returns_undefined() {
    assert!(FunctionRef::noop().call(&[]).is_undefined());
}

#[test]
fn test_names_and_source() {
    let named = FunctionRef::named("save", |_| Value::Undefined);
    assert_eq!(named.name(), Some("save"));
    assert!(named.source().is_none());

    let sourced = FunctionRef::with_source("function load() {}", |_| Value::Undefined);
    assert!(sourced.name().is_none());
    assert_eq!(sourced.source(), Some("function load() {}"));
}

#[test]
fn test_display_name_overrides_debug_label() {
    let f = FunctionRef::named("inner", |_| Value::Undefined);
    assert_eq!(format!("{f:?}"), "[Function inner]");

    f.set_display_name("outer");
    assert_eq!(f.display_name().as_deref(), Some("outer"));
    assert_eq!(format!("{f:?}"), "[Function outer]");

    assert_eq!(format!("{:?}", FunctionRef::noop()), "[Function]");
}

#[test]
fn test_mark_role() {
    let f = FunctionRef::noop();
    assert!(f.role().is_none());
    f.mark_role(FakeRole::Stub);
    assert_eq!(f.role(), Some(FakeRole::Stub));
}

#[test]
fn test_metadata_is_shared_between_clones() {
    let f = FunctionRef::noop();
    let alias = f.clone();
    alias.mark_role(FakeRole::Spy);

    assert!(f.ptr_eq(&alias));
    assert_eq!(f.role(), Some(FakeRole::Spy));
}

#[test]
fn test_restore_without_interception_is_false() {
    let f = FunctionRef::noop();
    assert!(!f.is_wrapper());
    assert!(f.restorer().is_none());
    assert!(!f.restore());
}

#[test]
fn test_restore_runs_attached_restorer() {
    let original = FunctionRef::named("save", |_| Value::Undefined);
    let target = ObjectRef::new();
    target.set("save", original.clone());

    let substitute = target.wrap_method("save", &FunctionRef::noop()).unwrap();
    assert!(substitute.is_wrapper());
    assert!(substitute.restore());

    let restored = target.get("save");
    assert!(restored.as_function().is_some_and(|f| f.ptr_eq(&original)));
}

#[test]
fn test_body_captures_state() {
    let calls = std::sync::Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let f = FunctionRef::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::Undefined
    });

    f.call(&[]);
    f.clone().call(&[]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_fake_role_serialization() {
    assert_eq!(serde_json::to_string(&FakeRole::Spy).unwrap(), "\"spy\"");
    let role: FakeRole = serde_json::from_str("\"stub\"").unwrap();
    assert_eq!(role, FakeRole::Stub);
}

#[test]
fn test_function_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FunctionRef>();
    assert_send_sync::<Value>();
}
