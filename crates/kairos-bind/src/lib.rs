//! # Kairos Bind
//!
//! Declarative JSON model binder. A model declares its expected shape once
//! as a table of [`Field`] descriptors; a single generic validation routine
//! walks the input object against the table, and typed accessors assemble
//! the model only after the whole shape has been accepted. No partially
//! constructed model is ever observable.
//!
//! Validation rules, applied at every nesting depth:
//!
//! - a key the table does not declare is rejected, naming the key;
//! - strings are accepted as field values;
//! - objects are accepted only for [`FieldKind::Nested`] fields and are
//!   validated recursively against the nested table;
//! - arrays are rejected unconditionally;
//! - numbers, booleans and nulls are rejected as unexpected types;
//! - after the provided keys pass, every declared field that is not
//!   [`FieldKind::OptionalText`] must have been provided.
//!
//! # Example
//!
//! ```rust
//! use kairos_bind::{accessor, Bindable, Field};
//! use kairos_core::AppError;
//! use serde_json::{json, Map, Value};
//!
//! #[derive(Debug)]
//! struct Greeting {
//!     name: String,
//!     salutation: Option<String>,
//! }
//!
//! impl Bindable for Greeting {
//!     const FIELDS: &'static [Field] = &[
//!         Field::text("name"),
//!         Field::optional_text("salutation"),
//!     ];
//!
//!     fn assemble(object: &Map<String, Value>) -> Result<Self, AppError> {
//!         Ok(Self {
//!             name: accessor::text(object, "name")?,
//!             salutation: accessor::optional_text(object, "salutation"),
//!         })
//!     }
//! }
//!
//! let greeting = Greeting::bind(&json!({"name": "world"})).unwrap();
//! assert_eq!(greeting.name, "world");
//! assert!(greeting.salutation.is_none());
//!
//! let err = Greeting::bind(&json!({"nam": "world"})).unwrap_err();
//! assert_eq!(err.message(), "unexpected param provided: nam");
//! ```

#![doc(html_root_url = "https://docs.rs/kairos-bind/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bind;
mod schema;

pub use bind::accessor;
pub use schema::{Bindable, Field, FieldKind};
