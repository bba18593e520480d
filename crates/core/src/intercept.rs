// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Method interception with exact restoration.
//!
//! [`wrap_method`] swaps a function-valued property for a substitute and
//! attaches a [`Restorer`] to the substitute. The restorer is the only record
//! of the interception: there is no global registry, and "is this property
//! already wrapped" is answered by checking the current function for a
//! restorer (or a [`FakeRole`] claimed by a spy/stub).

use crate::function::{FakeRole, FunctionRef};
use crate::object::{ObjectRef, WeakObjectRef};
use crate::value::{Value, ValueKind};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Why a property counts as already wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapReason {
    /// Installed by [`wrap_method`] and not restored
    Intercepted,
    /// Marked as a spy by its creator
    Spied,
    /// Marked as a stub by its creator
    Stubbed,
}

impl fmt::Display for WrapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WrapReason::Intercepted => "wrapped",
            WrapReason::Spied => "spied on",
            WrapReason::Stubbed => "stubbed",
        })
    }
}

/// Errors raised by [`wrap_method`].
///
/// All of them indicate a mistake at the call site; none leave the target
/// modified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("should wrap property of object, got {kind}")]
    InvalidTarget { kind: ValueKind },

    #[error("method wrapper should be function, got {kind}")]
    InvalidSubstitute { kind: ValueKind },

    #[error("attempted to wrap {kind} property {property} as function")]
    NotAFunction { property: String, kind: ValueKind },

    #[error("attempted to wrap {property} which is already {reason}")]
    AlreadyWrapped { property: String, reason: WrapReason },
}

impl WrapError {
    /// Reason code for [`WrapError::AlreadyWrapped`]
    pub fn reason(&self) -> Option<WrapReason> {
        match self {
            WrapError::AlreadyWrapped { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Property the failed wrap was aimed at, when known
    pub fn property(&self) -> Option<&str> {
        match self {
            WrapError::NotAFunction { property, .. }
            | WrapError::AlreadyWrapped { property, .. } => Some(property),
            _ => None,
        }
    }
}

struct Interception {
    target: WeakObjectRef,
    property: String,
    original: FunctionRef,
}

/// Undo record for one interception.
///
/// Holds the target weakly (the target owns the substitute, which owns this
/// record) and the original function strongly. Only this module can create
/// one, so its presence on a function marks that function as installed by
/// [`wrap_method`].
#[derive(Clone)]
pub struct Restorer {
    inner: Arc<Interception>,
}

impl Restorer {
    fn new(target: &ObjectRef, property: &str, original: FunctionRef) -> Self {
        Self {
            inner: Arc::new(Interception {
                target: target.downgrade(),
                property: property.to_string(),
                original,
            }),
        }
    }

    pub fn property(&self) -> &str {
        &self.inner.property
    }

    /// The function that was in place before the interception
    pub fn original(&self) -> &FunctionRef {
        &self.inner.original
    }

    /// The intercepted object, if it is still alive
    pub fn target(&self) -> Option<ObjectRef> {
        self.inner.target.upgrade()
    }

    /// Write the original function back to the target.
    ///
    /// Unconditional: whatever currently sits at the property is replaced,
    /// and calling this again rewrites the same value. No-op once the
    /// target has been dropped.
    pub fn restore(&self) {
        let Some(target) = self.target() else {
            log::debug!("target of {} dropped before restore", self.inner.property);
            return;
        };
        target.set(self.inner.property.clone(), self.inner.original.clone());
        log::debug!("restored {}", self.inner.property);
    }
}

impl fmt::Debug for Restorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restorer")
            .field("property", &self.inner.property)
            .field("original", &self.inner.original)
            .field("target_alive", &self.target().is_some())
            .finish()
    }
}

/// Replace `target[property]` with `substitute`.
///
/// `target` must be an object, `substitute` a function, and the current
/// value of the property (inherited values included) a function that is not
/// already wrapped. On success the substitute is installed as an own
/// property, named after `property`, given a [`Restorer`], and returned.
pub fn wrap_method(
    target: &Value,
    property: &str,
    substitute: &Value,
) -> Result<FunctionRef, WrapError> {
    let Value::Object(object) = target else {
        return Err(WrapError::InvalidTarget {
            kind: target.kind(),
        });
    };
    let Value::Function(substitute) = substitute else {
        return Err(WrapError::InvalidSubstitute {
            kind: substitute.kind(),
        });
    };
    object.wrap_method(property, substitute)
}

impl ObjectRef {
    /// Typed form of [`wrap_method`]
    pub fn wrap_method(
        &self,
        property: &str,
        substitute: &FunctionRef,
    ) -> Result<FunctionRef, WrapError> {
        let original = match self.get(property) {
            Value::Function(function) => function,
            other => {
                return Err(WrapError::NotAFunction {
                    property: property.to_string(),
                    kind: other.kind(),
                })
            }
        };

        if let Some(reason) = wrapped_reason(&original) {
            return Err(WrapError::AlreadyWrapped {
                property: property.to_string(),
                reason,
            });
        }

        self.set(property, substitute.clone());
        substitute.set_display_name(property);
        if let Some(previous) = substitute.attach_restorer(Restorer::new(self, property, original))
        {
            log::warn!(
                "substitute for {} was already installed for {}; its earlier restorer is discarded",
                property,
                previous.property()
            );
        }

        log::debug!("wrapped {}", property);
        Ok(substitute.clone())
    }
}

fn wrapped_reason(function: &FunctionRef) -> Option<WrapReason> {
    if function.is_wrapper() {
        return Some(WrapReason::Intercepted);
    }
    function.role().map(|role| match role {
        FakeRole::Spy => WrapReason::Spied,
        FakeRole::Stub => WrapReason::Stubbed,
    })
}

#[cfg(test)]
#[path = "intercept_tests.rs"]
mod tests;
