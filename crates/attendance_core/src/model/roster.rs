//! Roster document model.
//!
//! # Responsibility
//! - Define `Student` and the persisted `Document` payload.
//! - Define validation/index errors raised by roster mutations.
//!
//! # Invariants
//! - Student order is roll-number order.
//! - Names committed through store mutators are trimmed and non-empty.
//!   Names read from a document file are taken as stored.
//! - Field names match the persisted document format exactly:
//!   `major`, `weeks`, `students[].name`, `students[].attendance`.

use crate::model::attendance::AttendanceRecord;
use crate::model::calendar::Calendar;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// In-memory identity for a roster row.
///
/// Assigned on add/load and never persisted; the document format stays
/// positional.
pub type StudentId = Uuid;

/// One student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name.
    pub name: String,
    pub attendance: AttendanceRecord,
}

impl Student {
    /// Creates a student with an empty record shaped for `calendar`.
    ///
    /// # Errors
    /// - `ValidationError::BlankName` when `name` trims to nothing.
    pub fn new(name: &str, calendar: &Calendar) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            attendance: AttendanceRecord::empty(calendar),
        })
    }
}

/// Unit of persistence: major label plus ordered roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Free-text course/major label; may be empty.
    #[serde(default)]
    pub major: String,
    /// Echo of the calendar week count, checked on load.
    pub weeks: usize,
    pub students: Vec<Student>,
}

impl Document {
    /// Creates an empty document for `calendar`.
    pub fn empty(calendar: &Calendar) -> Self {
        Self {
            major: String::new(),
            weeks: calendar.total_weeks(),
            students: Vec::new(),
        }
    }
}

/// Rejected user input. The mutation is not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming whitespace.
    BlankName,
    /// Day edit does not carry exactly one value per period.
    PeriodCountMismatch { expected: usize, actual: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "student name cannot be blank"),
            Self::PeriodCountMismatch { expected, actual } => write!(
                f,
                "day edit must contain {expected} period values, got {actual}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Out-of-range roster coordinate. Indicates a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    Student { index: usize, len: usize },
    Week { index: usize, len: usize },
    Day { index: usize, len: usize },
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student { index, len } => {
                write!(f, "student index {index} out of range (roster has {len})")
            }
            Self::Week { index, len } => {
                write!(f, "week index {index} out of range (calendar has {len})")
            }
            Self::Day { index, len } => {
                write!(f, "day index {index} out of range (calendar has {len})")
            }
        }
    }
}

impl Error for IndexError {}

/// Trims `name` and rejects blank values.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}
