// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable names for functions and fakes.

use crate::function::FunctionRef;
use crate::object::ObjectRef;
use crate::value::Value;
use regex::Regex;
use std::sync::LazyLock;

/// Fallback label for a fake nothing else names
pub const DEFAULT_FAKE_LABEL: &str = "fake";

/// `function name` anywhere, or `fn name` as a declaration (start of text or
/// after whitespace, `{` or `;`), so an identifier called `fn` never matches.
static FUNCTION_NAME_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s+([A-Za-z_$][\w$]*)|(?:^|[\s{;])fn\s+([A-Za-z_]\w*)").ok()
});

/// Best-effort name of a function.
///
/// Prefers the display name, then the inherent name, then an identifier
/// extracted from the source text. Empty names count as absent.
pub fn infer_name(function: &FunctionRef) -> Option<String> {
    function
        .display_name()
        .filter(|name| !name.is_empty())
        .or_else(|| {
            function
                .name()
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .or_else(|| function.source().and_then(name_from_source))
}

fn name_from_source(source: &str) -> Option<String> {
    let regex = FUNCTION_NAME_REGEX.as_ref()?;
    let captures = regex.captures(source)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
}

/// Label for a fake in messages.
///
/// Uses the name of the property holding this exact function on the most
/// recent receiver that has one (receivers are searched last to first, each
/// through its prototype chain), then the display name, then
/// [`DEFAULT_FAKE_LABEL`].
pub fn fake_label(function: &FunctionRef, receivers: &[ObjectRef]) -> String {
    receivers
        .iter()
        .rev()
        .find_map(|receiver| property_holding(receiver, function))
        .or_else(|| function.display_name())
        .unwrap_or_else(|| DEFAULT_FAKE_LABEL.to_string())
}

fn property_holding(receiver: &ObjectRef, function: &FunctionRef) -> Option<String> {
    let mut cursor = Some(receiver.clone());
    while let Some(object) = cursor {
        let found = object.entries().into_iter().find_map(|(key, value)| match value {
            Value::Function(candidate) if candidate.ptr_eq(function) => Some(key),
            _ => None,
        });
        if found.is_some() {
            return found;
        }
        cursor = object.prototype();
    }
    None
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
