// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared objects and arrays.
//!
//! Both are reference types: cloning a handle shares the underlying storage,
//! and [`ObjectRef::ptr_eq`] / [`ArrayRef::ptr_eq`] expose identity.

use crate::value::Value;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Default)]
struct ObjectData {
    properties: BTreeMap<String, Value>,
    prototype: Option<ObjectRef>,
}

/// Handle to a keyed mapping with an optional prototype.
///
/// Reads ([`get`](Self::get)) fall through to the prototype chain; writes
/// ([`set`](Self::set)) always land on the object itself.
#[derive(Clone, Default)]
pub struct ObjectRef {
    inner: Arc<RwLock<ObjectData>>,
}

impl ObjectRef {
    /// Create an empty object with no prototype
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object delegating reads to `proto`
    pub fn with_prototype(proto: &ObjectRef) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ObjectData {
                properties: BTreeMap::new(),
                prototype: Some(proto.clone()),
            })),
        }
    }

    /// Create an object from key/value pairs (later pairs win)
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let properties = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            inner: Arc::new(RwLock::new(ObjectData {
                properties,
                prototype: None,
            })),
        }
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.inner.read().prototype.clone()
    }

    /// Replace the prototype.
    ///
    /// Returns `false` and leaves the object untouched if the new chain
    /// would loop back to this object.
    pub fn set_prototype(&self, proto: Option<&ObjectRef>) -> bool {
        let mut cursor = proto.cloned();
        while let Some(candidate) = cursor {
            if candidate.ptr_eq(self) {
                return false;
            }
            cursor = candidate.prototype();
        }
        self.inner.write().prototype = proto.cloned();
        true
    }

    /// Read a property, walking the prototype chain.
    ///
    /// Missing properties read as [`Value::Undefined`].
    pub fn get(&self, key: &str) -> Value {
        let mut cursor = Some(self.clone());
        while let Some(object) = cursor {
            let data = object.inner.read();
            if let Some(value) = data.properties.get(key) {
                return value.clone();
            }
            cursor = data.prototype.clone();
        }
        Value::Undefined
    }

    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.inner.read().properties.get(key).cloned()
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.inner.read().properties.contains_key(key)
    }

    /// Whether the property is visible on this object or its prototype chain
    pub fn has(&self, key: &str) -> bool {
        let mut cursor = Some(self.clone());
        while let Some(object) = cursor {
            let data = object.inner.read();
            if data.properties.contains_key(key) {
                return true;
            }
            cursor = data.prototype.clone();
        }
        false
    }

    /// Write an own property, shadowing any inherited one
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.write().properties.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.inner.write().properties.remove(key)
    }

    /// Own property names (inherited ones excluded)
    pub fn own_keys(&self) -> Vec<String> {
        self.inner.read().properties.keys().cloned().collect()
    }

    /// Snapshot of own properties
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner
            .read()
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.inner.read().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().properties.is_empty()
    }

    /// Call the function stored at `key` (prototype chain included).
    ///
    /// Returns `None` when the property does not hold a function.
    pub fn call(&self, key: &str, args: &[Value]) -> Option<Value> {
        match self.get(key) {
            Value::Function(function) => Some(function.call(args)),
            _ => None,
        }
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    pub(crate) fn downgrade(&self) -> WeakObjectRef {
        WeakObjectRef {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys only: values may refer back to this object.
        f.debug_struct("ObjectRef")
            .field("keys", &self.own_keys())
            .field("has_prototype", &self.inner.read().prototype.is_some())
            .finish()
    }
}

/// Non-owning object handle, used by interception records.
#[derive(Clone)]
pub(crate) struct WeakObjectRef {
    inner: Weak<RwLock<ObjectData>>,
}

impl WeakObjectRef {
    pub(crate) fn upgrade(&self) -> Option<ObjectRef> {
        self.inner.upgrade().map(|inner| ObjectRef { inner })
    }
}

/// Handle to an ordered sequence of values.
#[derive(Clone, Default)]
pub struct ArrayRef {
    inner: Arc<RwLock<Vec<Value>>>,
}

impl ArrayRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.inner.write().push(value.into());
    }

    /// Element at `index`, or [`Value::Undefined`] past the end
    pub fn get(&self, index: usize) -> Value {
        self.inner.read().get(index).cloned().unwrap_or_default()
    }

    /// Store at `index`, padding any gap with [`Value::Undefined`]
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut items = self.inner.write();
        if index >= items.len() {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value.into();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the elements
    pub fn items(&self) -> Vec<Value> {
        self.inner.read().clone()
    }

    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl FromIterator<Value> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayRef")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
