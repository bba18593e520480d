// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Callable values and the metadata fakes attach to them.

use crate::intercept::Restorer;
use crate::value::Value;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Function body signature
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Role a higher-level fake claims for the function it installed.
///
/// Spy and stub implementations mark their functions so that a later
/// interception attempt can explain what is already in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FakeRole {
    /// Records calls and passes through
    Spy,
    /// Replaces return values
    Stub,
}

#[derive(Default)]
struct FunctionMeta {
    display_name: Option<String>,
    restorer: Option<Restorer>,
    role: Option<FakeRole>,
}

struct FunctionData {
    name: Option<String>,
    source: Option<String>,
    body: Box<NativeFn>,
    meta: RwLock<FunctionMeta>,
}

/// Shared handle to a callable.
///
/// Identity is by reference: two handles are the same function only if
/// [`ptr_eq`](Self::ptr_eq) holds.
#[derive(Clone)]
pub struct FunctionRef {
    inner: Arc<FunctionData>,
}

impl FunctionRef {
    fn build<F>(name: Option<String>, source: Option<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionData {
                name,
                source,
                body: Box::new(body),
                meta: RwLock::new(FunctionMeta::default()),
            }),
        }
    }

    /// Anonymous function
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::build(None, None, body)
    }

    /// Function with an inherent name
    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::build(Some(name.into()), None, body)
    }

    /// Anonymous function carrying a textual source representation
    pub fn with_source<F>(source: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::build(None, Some(source.into()), body)
    }

    /// Anonymous function returning `undefined`
    pub fn noop() -> Self {
        Self::new(|_| Value::Undefined)
    }

    /// Function returning a clone of `value` on every call
    pub fn returning(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_| value.clone())
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.inner.source.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner.body)(args)
    }

    pub fn display_name(&self) -> Option<String> {
        self.inner.meta.read().display_name.clone()
    }

    pub fn set_display_name(&self, name: impl Into<String>) {
        self.inner.meta.write().display_name = Some(name.into());
    }

    pub fn role(&self) -> Option<FakeRole> {
        self.inner.meta.read().role
    }

    /// Claim a fake role for this function
    pub fn mark_role(&self, role: FakeRole) {
        self.inner.meta.write().role = Some(role);
    }

    /// The interception record attached when this function was installed
    /// by [`wrap_method`](crate::wrap_method)
    pub fn restorer(&self) -> Option<Restorer> {
        self.inner.meta.read().restorer.clone()
    }

    /// Whether this function was installed by the interception protocol
    pub fn is_wrapper(&self) -> bool {
        self.inner.meta.read().restorer.is_some()
    }

    /// Undo the interception that installed this function.
    ///
    /// Returns `false` if the function carries no interception record.
    pub fn restore(&self) -> bool {
        // Clone first: restoring writes to the target, which must not
        // happen while this function's metadata is locked.
        match self.restorer() {
            Some(restorer) => {
                restorer.restore();
                true
            }
            None => false,
        }
    }

    /// Attach an interception record, returning any record it replaces
    pub(crate) fn attach_restorer(&self, restorer: Restorer) -> Option<Restorer> {
        self.inner.meta.write().restorer.replace(restorer)
    }

    pub fn ptr_eq(&self, other: &FunctionRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_name().or_else(|| self.name().map(str::to_string)) {
            Some(name) if !name.is_empty() => write!(f, "[Function {name}]"),
            _ => f.write_str("[Function]"),
        }
    }
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
