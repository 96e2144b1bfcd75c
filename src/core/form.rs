//! core::form
//!
//! Binding of submitted job configuration form data to metadata.
//!
//! # Form Shape
//!
//! ```json
//! {
//!   "metadataJobProperty": true,
//!   "listOfMetaData": [
//!     { "key": "env", "value": "prod" },
//!     { "key": "owner", "value": "teamX" }
//!   ]
//! }
//! ```
//!
//! - The checkbox decides whether the job carries the property at all.
//!   Missing or unchecked means the property is dropped from the job.
//! - `listOfMetaData` holds one object per form row. A form with exactly
//!   one row may submit that row as a bare object instead of an array.
//! - Rows are bound field by field. Nothing is filtered: a row with an
//!   empty key and empty value still becomes an entry.
//!
//! # Example
//!
//! ```
//! use jobmeta::core::form::bind_form;
//! use serde_json::json;
//!
//! let form = json!({
//!     "metadataJobProperty": true,
//!     "listOfMetaData": [{ "key": "env", "value": "prod" }]
//! });
//!
//! let metadata = bind_form(&form).unwrap().expect("checkbox is set");
//! assert_eq!(metadata.value_of("env"), Some("prod"));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::metadata::{MetadataCollection, MetadataEntry};

/// Form field of the "enable metadata" checkbox.
pub const PROPERTY_NAME: &str = "metadataJobProperty";

/// Form field holding the metadata rows.
pub const ROWS_FIELD: &str = "listOfMetaData";

/// Human-readable name of the property.
pub const DISPLAY_NAME: &str = "MetaDataJobProperty";

/// Errors from form binding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("row {index} of '{ROWS_FIELD}' is not an object")]
    InvalidRow { index: usize },

    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

/// Bind submitted form data to a metadata collection.
///
/// Returns `Ok(None)` when the job should not carry the property: the form
/// is `null` or not an object, or the checkbox is missing or unchecked.
///
/// # Errors
///
/// - [`FormError::InvalidField`] for a checkbox, row list, key, or value of
///   the wrong type
/// - [`FormError::InvalidRow`] for a row that is not an object
pub fn bind_form(form: &Value) -> Result<Option<MetadataCollection>, FormError> {
    let Value::Object(fields) = form else {
        return Ok(None);
    };

    if !checkbox(fields)? {
        return Ok(None);
    }

    bind_rows(fields.get(ROWS_FIELD)).map(Some)
}

/// Read the checkbox. Accepts booleans and the usual string encodings.
fn checkbox(fields: &Map<String, Value>) -> Result<bool, FormError> {
    match fields.get(PROPERTY_NAME) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(checked)) => Ok(*checked),
        Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" | "on" => Ok(true),
            "false" | "off" | "" => Ok(false),
            _ => Err(invalid_field(PROPERTY_NAME, "a boolean")),
        },
        Some(_) => Err(invalid_field(PROPERTY_NAME, "a boolean")),
    }
}

fn bind_rows(rows: Option<&Value>) -> Result<MetadataCollection, FormError> {
    match rows {
        None | Some(Value::Null) => Ok(MetadataCollection::empty()),
        Some(Value::Array(rows)) => rows
            .iter()
            .enumerate()
            .map(|(index, row)| bind_row(index, row))
            .collect::<Result<Vec<_>, _>>()
            .map(MetadataCollection::new),
        Some(row @ Value::Object(_)) => {
            bind_row(0, row).map(|entry| MetadataCollection::new(vec![entry]))
        }
        Some(_) => Err(invalid_field(ROWS_FIELD, "a list of rows")),
    }
}

/// Bind one row. A missing key binds as empty; a missing value as absent.
fn bind_row(index: usize, row: &Value) -> Result<MetadataEntry, FormError> {
    let Value::Object(fields) = row else {
        return Err(FormError::InvalidRow { index });
    };

    let key = text_field(fields, "key", index)?.unwrap_or_default();
    let value = text_field(fields, "value", index)?;

    Ok(MetadataEntry::new(key, value))
}

fn text_field(
    fields: &Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<Option<String>, FormError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid_field(
            &format!("{}[{}].{}", ROWS_FIELD, index, name),
            "a string",
        )),
    }
}

fn invalid_field(field: &str, expected: &'static str) -> FormError {
    FormError::InvalidField {
        field: field.to_string(),
        expected,
    }
}
