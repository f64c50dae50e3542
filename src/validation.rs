// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request body presence checks.

use serde_json::Value;

/// Check that every `required` key is present in `body` with a usable value.
///
/// A value is usable unless it is `null` or the empty string. Anything that
/// is not a JSON object fails, so a missing or malformed body is just an
/// invalid body.
pub fn check_body(body: &Value, required: &[&str]) -> bool {
    let Some(fields) = body.as_object() else {
        return false;
    };

    required.iter().all(|name| match fields.get(*name) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    })
}

/// Read a field that already passed [`check_body`] as text.
///
/// Strings are returned as-is; other scalars use their JSON rendering
/// (`123`, `true`).
pub fn field_text(body: &Value, name: &str) -> String {
    match body.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
