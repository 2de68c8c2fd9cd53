// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! Shared helpers for validating a `serde_json::Value` tree against the
//! canonical per-node schema before (or while) emitting source text.
//!
//! The applier never derives `Deserialize` for `grug_ast` types: the
//! schema requires rejecting documents whose fields are merely present
//! but out of order, which an ordinary `Deserialize` impl cannot observe
//! since JSON object field order is insignificant to it. Validating by
//! hand against `serde_json::Value` (built with the `preserve_order`
//! feature so key order mirrors the document) is what lets field order
//! become part of the schema instead of being silently ignored.

use grug_errors::{Error, Result, SchemaError};
use serde_json::{Map, Value};

/// The extension recognized by the directory walker and the schema's
/// tree-file entries.
pub const EXTENSION: &str = "grug";

/// One field's expectation within a node's schema: its JSON key and
/// whether it's required (as opposed to optional-and-possibly-absent).
pub type FieldSpec = (&'static str, bool);

/// Checks that `obj`'s keys appear in exactly the order given by `spec`,
/// skipping over absent optional fields, and that no unexpected key is
/// present. `skip_first` is `true` for tagged nodes, whose leading
/// `"type"` key has already been consumed by the caller.
pub fn check_field_order(obj: &Map<String, Value>, path: &str, spec: &[FieldSpec], skip_first: bool) -> Result<()> {
    let mut keys = obj.keys();
    if skip_first {
        keys.next();
    }
    let mut keys = keys.peekable();

    for &(field, required) in spec {
        match keys.peek() {
            Some(key) if *key == field => {
                keys.next();
            }
            _ if required => {
                return Err(SchemaError::MissingField { path: path.to_string(), field: field.to_string() }.into());
            }
            _ => {}
        }
    }

    if let Some(extra) = keys.next() {
        return Err(SchemaError::UnexpectedField { path: path.to_string(), field: extra.clone() }.into());
    }

    Ok(())
}

/// Returns the object's `"type"` discriminant, or a [`SchemaError`] if
/// the node isn't an object, the field is missing/not a string, or (since
/// every tagged node's `"type"` key must lead) another key precedes it.
pub fn discriminant<'a>(value: &'a Value, path: &str) -> Result<(&'a Map<String, Value>, &'a str)> {
    let obj = as_object(value, path)?;
    match obj.keys().next() {
        Some(first) if first != "type" => {
            return Err(SchemaError::WrongFieldOrder {
                path: path.to_string(),
                expected: "type".to_string(),
                found: first.clone(),
            }
            .into());
        }
        None => return Err(SchemaError::MissingField { path: path.to_string(), field: "type".to_string() }.into()),
        _ => {}
    }
    match obj.get("type") {
        Some(Value::String(s)) => Ok((obj, s.as_str())),
        Some(_) => Err(SchemaError::WrongType {
            path: format!("{path}.type"),
            field: "type".to_string(),
            expected: "string".to_string(),
        }
        .into()),
        None => unreachable!("checked above that the first key is \"type\""),
    }
}

pub fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| SchemaError::ExpectedObject { path: path.to_string() }.into())
}

pub fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| SchemaError::ExpectedArray { path: path.to_string() }.into())
}

/// Extracts a required string field without enforcing non-emptiness. Use
/// for literal payloads (`"str"`, `"value"`) and comment text, none of
/// which the non-empty-identifier invariant applies to.
pub fn required_text(obj: &Map<String, Value>, path: &str, field: &str) -> Result<String> {
    let value = obj
        .get(field)
        .ok_or_else(|| Error::from(SchemaError::MissingField { path: path.to_string(), field: field.to_string() }))?;
    let s = value.as_str().ok_or_else(|| {
        SchemaError::WrongType { path: format!("{path}.{field}"), field: field.to_string(), expected: "string".to_string() }
    })?;
    Ok(s.to_string())
}

/// Extracts a required string field, rejecting an empty string per the
/// non-empty-identifier invariant (names, types, identifiers).
pub fn required_str(obj: &Map<String, Value>, path: &str, field: &str) -> Result<String> {
    let s = required_text(obj, path, field)?;
    if s.is_empty() {
        return Err(SchemaError::EmptyString { path: path.to_string(), field: field.to_string() }.into());
    }
    Ok(s)
}

/// Extracts an optional string field (`None` when absent).
pub fn optional_str(obj: &Map<String, Value>, path: &str, field: &str) -> Result<Option<String>> {
    match obj.get(field) {
        None => Ok(None),
        Some(value) => {
            let s = value.as_str().ok_or_else(|| {
                SchemaError::WrongType {
                    path: format!("{path}.{field}"),
                    field: field.to_string(),
                    expected: "string".to_string(),
                }
            })?;
            Ok(Some(s.to_string()))
        }
    }
}

/// Extracts an array field, treating an absent key the same as `[]`.
pub fn optional_array<'a>(obj: &'a Map<String, Value>, path: &str, field: &str) -> Result<&'a [Value]> {
    match obj.get(field) {
        None => Ok(&[]),
        Some(value) => as_array(value, &format!("{path}.{field}")).map(Vec::as_slice),
    }
}

/// An array field that, when present, must be non-empty (§3 invariant:
/// "present but empty" is not a valid encoding for these fields).
pub fn non_empty_array<'a>(obj: &'a Map<String, Value>, path: &str, field: &str) -> Result<&'a [Value]> {
    let arr = optional_array(obj, path, field)?;
    if obj.contains_key(field) && arr.is_empty() {
        return Err(SchemaError::EmptyArray { path: path.to_string(), field: field.to_string() }.into());
    }
    Ok(arr)
}
