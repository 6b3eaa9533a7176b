//! The generic validation pass and the typed accessors.

use kairos_core::AppError;
use serde_json::{Map, Value};

use crate::{Bindable, Field, FieldKind};

/// Validates a JSON object against a field-descriptor table.
///
/// Two passes: first every provided key is checked against the table (and
/// nested objects are checked recursively), then every declared field that
/// is not optional must have been provided. Runs to the first failure.
pub(crate) fn check_fields(
    object: &Map<String, Value>,
    fields: &'static [Field],
) -> Result<(), AppError> {
    for (key, value) in object {
        let Some(field) = fields.iter().find(|f| f.name == key) else {
            return Err(AppError::validation(format!(
                "unexpected param provided: {key}"
            )));
        };
        match value {
            // Strings assign directly; whether the field wanted a string
            // is settled by the accessor that reads it.
            Value::String(_) => {}
            Value::Object(nested) => match field.kind {
                FieldKind::Nested(table) => check_fields(nested, table)?,
                FieldKind::Text | FieldKind::OptionalText => {
                    return Err(AppError::validation(format!(
                        "unexpected type of json param: {key}"
                    )));
                }
            },
            Value::Array(_) => {
                return Err(AppError::validation(format!(
                    "list in json is not supported: {key}"
                )));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                return Err(AppError::validation(format!(
                    "unexpected type of json param: {key}"
                )));
            }
        }
    }

    for field in fields {
        if object.contains_key(field.name) {
            continue;
        }
        if matches!(field.kind, FieldKind::OptionalText) {
            continue;
        }
        return Err(AppError::validation(format!(
            "missing required param: {}",
            field.name
        )));
    }

    Ok(())
}

/// Typed accessors used by [`crate::Bindable::assemble`] implementations.
///
/// Each accessor reads one declared field from an object that already
/// passed [`check_fields`]; the error paths here cover the shapes the
/// validation pass intentionally lets through (a string where a nested
/// object was declared) and guard the table/accessor agreement.
pub mod accessor {
    use super::{AppError, Bindable, Map, Value};

    /// Reads a required string field.
    pub fn text(object: &Map<String, Value>, name: &str) -> Result<String, AppError> {
        match object.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(AppError::validation(format!(
                "unexpected type of json param: {name}"
            ))),
            None => Err(AppError::validation(format!(
                "missing required param: {name}"
            ))),
        }
    }

    /// Reads an optional string field; absence yields `None`.
    #[must_use]
    pub fn optional_text(object: &Map<String, Value>, name: &str) -> Option<String> {
        match object.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Reads and binds a required nested-object field.
    pub fn nested<T: Bindable>(object: &Map<String, Value>, name: &str) -> Result<T, AppError> {
        match object.get(name) {
            Some(value @ Value::Object(_)) => T::bind(value),
            Some(_) => Err(AppError::validation(format!(
                "unexpected type of json param: {name}"
            ))),
            None => Err(AppError::validation(format!(
                "missing required param: {name}"
            ))),
        }
    }
}
