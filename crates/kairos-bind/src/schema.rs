//! Field descriptor tables and the [`Bindable`] trait.

use kairos_core::AppError;
use serde_json::{Map, Value};

use crate::bind::check_fields;

/// The accepted shape of a single declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A required string.
    Text,
    /// An optional string; absence is the only way to leave it unset.
    OptionalText,
    /// A required nested object, validated against its own table.
    Nested(&'static [Field]),
}

/// One entry of a model's field-descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The JSON key this field binds.
    pub name: &'static str,
    /// The accepted shape.
    pub kind: FieldKind,
}

impl Field {
    /// Declares a required string field.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// Declares an optional string field.
    #[must_use]
    pub const fn optional_text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::OptionalText,
        }
    }

    /// Declares a required nested-object field with its own table.
    #[must_use]
    pub const fn nested(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            kind: FieldKind::Nested(fields),
        }
    }
}

/// A model that can be bound from a JSON object.
///
/// Implementors declare their shape in [`Bindable::FIELDS`] and build the
/// typed value in [`Bindable::assemble`] using the [`crate::accessor`]
/// functions. [`Bindable::bind`] is the entry point: it validates the whole
/// input against the table before `assemble` runs, so `assemble` only ever
/// sees an input whose shape has been accepted.
pub trait Bindable: Sized {
    /// The field-descriptor table for this model.
    const FIELDS: &'static [Field];

    /// Builds the model from a validated object.
    fn assemble(object: &Map<String, Value>) -> Result<Self, AppError>;

    /// Validates `value` against [`Bindable::FIELDS`] and assembles the model.
    fn bind(value: &Value) -> Result<Self, AppError> {
        let Value::Object(object) = value else {
            return Err(AppError::validation("request body is not a json object"));
        };
        check_fields(object, Self::FIELDS)?;
        Self::assemble(object)
    }
}
