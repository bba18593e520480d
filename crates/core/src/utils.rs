// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Object helpers shared by fakes and assertions.

use crate::object::ObjectRef;

/// Copy own properties of each source onto `target`, left to right.
///
/// Later sources win. Returns `target`.
pub fn merge<'a, I>(target: &ObjectRef, sources: I) -> ObjectRef
where
    I: IntoIterator<Item = &'a ObjectRef>,
{
    for source in sources {
        for (key, value) in source.entries() {
            target.set(key, value);
        }
    }
    target.clone()
}

/// New empty object whose prototype is `proto`
pub fn create(proto: &ObjectRef) -> ObjectRef {
    ObjectRef::with_prototype(proto)
}

/// Own keys in lexicographic order.
///
/// The order is part of the contract: assertion output built from it is
/// deterministic.
pub fn own_keys_sorted(object: &ObjectRef) -> Vec<String> {
    let mut keys = object.own_keys();
    keys.sort();
    keys
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
