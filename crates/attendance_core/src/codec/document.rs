//! JSON document encoding.
//!
//! Format: `{"major": str, "weeks": int, "students": [{"name": str,
//! "attendance": [[[null|0|1]]]}]}`. Output is pretty-printed with 2-space
//! indentation and keeps non-ASCII text verbatim.

use crate::model::calendar::Calendar;
use crate::model::roster::Document;
use crate::model::shape::normalize_in_place;
use log::{debug, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed or unencodable document.
#[derive(Debug)]
pub enum FormatError {
    /// Not valid JSON, or a field has the wrong type or value.
    Json(serde_json::Error),
    /// Valid JSON whose structure is not a roster document.
    Shape(String),
}

impl FormatError {
    /// Line of the offending input, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json(err) if err.line() > 0 => Some(err.line()),
            _ => None,
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid attendance document: {err}"),
            Self::Shape(message) => write!(f, "invalid attendance document: {message}"),
        }
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Shape(_) => None,
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Encodes `document` as UTF-8 JSON bytes.
pub fn serialize(document: &Document) -> Result<Vec<u8>, FormatError> {
    let mut bytes = serde_json::to_vec_pretty(document)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes a document and normalizes every record to `calendar`.
///
/// # Errors
/// - `FormatError` when the payload is not an object with `weeks` and a
///   `students` sequence of `{name, attendance}` entries, or when a period
///   value is not `null`, `0` or `1`.
pub fn deserialize(bytes: &[u8], calendar: &Calendar) -> Result<Document, FormatError> {
    let value: Value = serde_json::from_slice(bytes)?;
    check_shape(&value)?;
    let mut document: Document = serde_json::from_value(value)?;

    if document.weeks != calendar.total_weeks() {
        warn!(
            "event=document_decode module=codec status=reshape stored_weeks={} calendar_weeks={}",
            document.weeks,
            calendar.total_weeks()
        );
    }
    let mut reshaped = 0usize;
    for student in &mut document.students {
        if normalize_in_place(&mut student.attendance, calendar) {
            reshaped += 1;
        }
    }
    document.weeks = calendar.total_weeks();

    debug!(
        "event=document_decode module=codec status=ok students={} reshaped={}",
        document.students.len(),
        reshaped
    );
    Ok(document)
}

// Serde would also accept positional arrays for structs; the format only
// allows objects.
fn check_shape(value: &Value) -> Result<(), FormatError> {
    let Some(fields) = value.as_object() else {
        return Err(FormatError::Shape("top-level value must be an object".into()));
    };
    let Some(students) = fields.get("students").and_then(Value::as_array) else {
        return Err(FormatError::Shape("`students` must be an array".into()));
    };
    if let Some(index) = students.iter().position(|student| !student.is_object()) {
        return Err(FormatError::Shape(format!(
            "`students[{index}]` must be an object with `name` and `attendance`"
        )));
    }
    Ok(())
}
