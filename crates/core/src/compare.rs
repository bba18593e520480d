// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural equality.
//!
//! Operands are classified by [`Shape`] and compared with one rule per shape
//! pair:
//!
//! - scalar on either side: strict identity ([`Value::is_identical`])
//! - sequence vs sequence: same length, positionally equal elements
//! - mapping vs mapping: every own key of the left side matches on the
//!   right, and the key sets agree per [`KeyPolicy`]
//! - sequence vs mapping: never equal
//!
//! The same composite is always equal to itself without being walked.
//! Composite pairs already on the recursion stack are handled per
//! [`CyclePolicy`]; there is no depth limit.

use crate::object::{ArrayRef, ObjectRef};
use crate::options::{CompareOptions, CyclePolicy, KeyPolicy};
use crate::value::{Shape, Value, ValueKind};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Errors surfaced by [`Comparator::compare`] and [`Comparator::explain`]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("cyclic structure reached at {path}")]
    CyclicStructure { path: String },
}

/// Why two values differ at a given path.
#[derive(Clone, Debug, PartialEq)]
pub enum MismatchReason {
    /// Scalars of the same kind with different values
    ValueDiffers { left: String, right: String },
    KindDiffers { left: ValueKind, right: ValueKind },
    LengthDiffers { left: usize, right: usize },
    /// Key present on the left only
    MissingKey { key: String },
    /// Key present on the right only
    UnexpectedKey { key: String },
    KeyCountDiffers { left: usize, right: usize },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::ValueDiffers { left, right } => {
                write!(f, "expected {left}, got {right}")
            }
            MismatchReason::KindDiffers { left, right } => {
                write!(f, "expected {left}, got {right}")
            }
            MismatchReason::LengthDiffers { left, right } => {
                write!(f, "expected length {left}, got {right}")
            }
            MismatchReason::MissingKey { key } => write!(f, "missing key {key:?}"),
            MismatchReason::UnexpectedKey { key } => write!(f, "unexpected key {key:?}"),
            MismatchReason::KeyCountDiffers { left, right } => {
                write!(f, "expected {left} keys, got {right}")
            }
        }
    }
}

/// First difference found between two values.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    /// Location from the root, e.g. `$.args[1].id`
    pub path: String,
    pub reason: MismatchReason,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Structural comparator configured by [`CompareOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Whether `a` and `b` are structurally equal.
    ///
    /// A cycle rejected under [`CyclePolicy::Reject`] counts as not equal.
    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        matches!(self.compare(a, b), Ok(true))
    }

    /// Like [`equals`](Self::equals), but a rejected cycle is an error
    pub fn compare(&self, a: &Value, b: &Value) -> Result<bool, CompareError> {
        Ok(self.explain(a, b)?.is_none())
    }

    /// First difference between `a` and `b`, or `None` if they are equal
    pub fn explain(&self, a: &Value, b: &Value) -> Result<Option<Mismatch>, CompareError> {
        Walk::new(&self.options).compare(a, b)
    }
}

/// Structural equality under default options.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    Comparator::default().equals(a, b)
}

enum Segment {
    Index(usize),
    Key(String),
}

type Step = Result<Option<Mismatch>, CompareError>;

struct Walk<'a> {
    options: &'a CompareOptions,
    path: Vec<Segment>,
    active: HashSet<(usize, usize)>,
}

impl<'a> Walk<'a> {
    fn new(options: &'a CompareOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
            active: HashSet::new(),
        }
    }

    fn compare(&mut self, a: &Value, b: &Value) -> Step {
        match (a.shape(), b.shape()) {
            (Shape::Scalar, _) | (_, Shape::Scalar) => Ok(self.scalars(a, b)),
            (Shape::Sequence, Shape::Sequence) | (Shape::Mapping, Shape::Mapping) => {
                self.composites(a, b)
            }
            _ => Ok(Some(self.mismatch(MismatchReason::KindDiffers {
                left: a.kind(),
                right: b.kind(),
            }))),
        }
    }

    fn scalars(&self, a: &Value, b: &Value) -> Option<Mismatch> {
        if a.is_identical(b) {
            return None;
        }
        let reason = if a.kind() == b.kind() {
            MismatchReason::ValueDiffers {
                left: a.to_string(),
                right: b.to_string(),
            }
        } else {
            MismatchReason::KindDiffers {
                left: a.kind(),
                right: b.kind(),
            }
        };
        Some(self.mismatch(reason))
    }

    fn composites(&mut self, a: &Value, b: &Value) -> Step {
        match (a, b) {
            (Value::Array(left), Value::Array(right)) => {
                if left.ptr_eq(right) {
                    return Ok(None);
                }
                self.guarded((left.addr(), right.addr()), |walk| {
                    walk.sequences(left, right)
                })
            }
            (Value::Object(left), Value::Object(right)) => {
                if left.ptr_eq(right) {
                    return Ok(None);
                }
                self.guarded((left.addr(), right.addr()), |walk| {
                    walk.mappings(left, right)
                })
            }
            _ => Ok(Some(self.mismatch(MismatchReason::KindDiffers {
                left: a.kind(),
                right: b.kind(),
            }))),
        }
    }

    fn guarded(&mut self, pair: (usize, usize), f: impl FnOnce(&mut Self) -> Step) -> Step {
        if !self.active.insert(pair) {
            return match self.options.cycle_policy {
                CyclePolicy::AssumeEqual => Ok(None),
                CyclePolicy::Reject => Err(CompareError::CyclicStructure {
                    path: self.render_path(),
                }),
            };
        }
        let step = f(self);
        self.active.remove(&pair);
        step
    }

    fn sequences(&mut self, left: &ArrayRef, right: &ArrayRef) -> Step {
        let (left, right) = (left.items(), right.items());
        if left.len() != right.len() {
            return Ok(Some(self.mismatch(MismatchReason::LengthDiffers {
                left: left.len(),
                right: right.len(),
            })));
        }
        for (index, (a, b)) in left.iter().zip(&right).enumerate() {
            if let Some(found) = self.descend(Segment::Index(index), a, b)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn mappings(&mut self, left: &ObjectRef, right: &ObjectRef) -> Step {
        let left: BTreeMap<String, Value> = left.entries().into_iter().collect();
        let right: BTreeMap<String, Value> = right.entries().into_iter().collect();
        let strict = self.options.key_policy == KeyPolicy::Strict;

        for (key, a) in &left {
            let b = match right.get(key) {
                Some(b) => b.clone(),
                None if strict => {
                    return Ok(Some(
                        self.mismatch(MismatchReason::MissingKey { key: key.clone() }),
                    ));
                }
                None => Value::Undefined,
            };
            if let Some(found) = self.descend(Segment::Key(key.clone()), a, &b)? {
                return Ok(Some(found));
            }
        }

        if strict {
            if let Some(extra) = right.keys().find(|key| !left.contains_key(*key)) {
                return Ok(Some(
                    self.mismatch(MismatchReason::UnexpectedKey { key: extra.clone() }),
                ));
            }
        } else if left.len() != right.len() {
            return Ok(Some(self.mismatch(MismatchReason::KeyCountDiffers {
                left: left.len(),
                right: right.len(),
            })));
        }
        Ok(None)
    }

    fn descend(&mut self, segment: Segment, a: &Value, b: &Value) -> Step {
        self.path.push(segment);
        let step = self.compare(a, b);
        self.path.pop();
        step
    }

    fn mismatch(&self, reason: MismatchReason) -> Mismatch {
        Mismatch {
            path: self.render_path(),
            reason,
        }
    }

    fn render_path(&self) -> String {
        let mut path = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Index(index) => path.push_str(&format!("[{index}]")),
                Segment::Key(key) if is_identifier(key) => {
                    path.push('.');
                    path.push_str(key);
                }
                Segment::Key(key) => path.push_str(&format!("[{key:?}]")),
            }
        }
        path
    }
}

/// Keys that can be written after `.` without being mistaken for nesting
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
