// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Primitives for building test doubles.
//!
//! Two pieces carry the weight:
//!
//! - [`wrap_method`] replaces a function-valued property on an object with a
//!   substitute and attaches a [`Restorer`] that puts the original back.
//! - [`deep_equal`] / [`Comparator`] decide structural equality of argument
//!   values, and can report the first difference.
//!
//! Spies, stubs, mocks and sandboxes are built on top of these and live
//! elsewhere.

mod compare;
mod function;
mod intercept;
mod naming;
mod object;
mod options;
mod utils;
mod value;

pub use compare::{deep_equal, CompareError, Comparator, Mismatch, MismatchReason};
pub use function::{FakeRole, FunctionRef, NativeFn};
pub use intercept::{wrap_method, Restorer, WrapError, WrapReason};
pub use naming::{fake_label, infer_name, DEFAULT_FAKE_LABEL};
pub use object::{ArrayRef, ObjectRef};
pub use options::{CompareOptions, CyclePolicy, KeyPolicy, OptionsError};
pub use utils::{create, merge, own_keys_sorted};
pub use value::{Shape, Value, ValueKind};
