//! Attendance store: roster state and its mutators.
//!
//! # Responsibility
//! - Own the in-memory document, the calendar it is shaped by and the dirty
//!   flag.
//! - Provide the only mutation paths for roster content.
//!
//! # Invariants
//! - A rejected mutation leaves the store unchanged, dirty flag included.
//! - Every applied mutation sets the dirty flag.
//! - Only `load_document` and a successful persist clear the dirty flag.
//! - Every record held by the store matches the calendar shape.

use crate::model::attendance::{AttendanceRecord, PeriodStatus};
use crate::model::calendar::Calendar;
use crate::model::roster::{validate_name, Document, IndexError, Student, StudentId, ValidationError};
use crate::model::shape::normalize_in_place;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RosterResult<T> = Result<T, RosterError>;

/// Rejected roster mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// User input failed validation.
    Validation(ValidationError),
    /// Coordinates do not address an existing row/week/day.
    Index(IndexError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Index(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Index(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RosterError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<IndexError> for RosterError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

/// In-memory roster with dirty tracking.
#[derive(Debug, Clone)]
pub struct RosterStore {
    calendar: Calendar,
    document: Document,
    /// Parallel to `document.students`.
    ids: Vec<StudentId>,
    dirty: bool,
}

impl RosterStore {
    /// Creates a clean store holding an empty document.
    pub fn new(calendar: Calendar) -> Self {
        Self {
            document: Document::empty(&calendar),
            calendar,
            ids: Vec::new(),
            dirty: false,
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Current document, ready for serialization.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn major(&self) -> &str {
        &self.document.major
    }

    pub fn students(&self) -> &[Student] {
        &self.document.students
    }

    pub fn student(&self, index: usize) -> Option<&Student> {
        self.document.students.get(index)
    }

    pub fn len(&self) -> usize {
        self.document.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.students.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Stable in-memory ID of the row at `index`.
    pub fn student_id(&self, index: usize) -> Option<StudentId> {
        self.ids.get(index).copied()
    }

    /// Current roll position of `id`.
    pub fn position_of(&self, id: StudentId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Appends a student with an empty record.
    ///
    /// Returns the new row index.
    pub fn add_student(&mut self, name: &str) -> RosterResult<usize> {
        let student = Student::new(name, &self.calendar)?;
        self.document.students.push(student);
        self.ids.push(Uuid::new_v4());
        self.dirty = true;

        let index = self.document.students.len() - 1;
        debug!(
            "event=student_add module=store status=ok index={} roster_len={}",
            index,
            self.document.students.len()
        );
        Ok(index)
    }

    /// Replaces the display name of the row at `index`.
    pub fn rename_student(&mut self, index: usize, new_name: &str) -> RosterResult<()> {
        self.check_student(index)?;
        let name = validate_name(new_name)?;
        self.document.students[index].name = name;
        self.dirty = true;

        debug!("event=student_rename module=store status=ok index={index}");
        Ok(())
    }

    /// Removes the row at `index`; later rows shift up one roll position.
    pub fn remove_student(&mut self, index: usize) -> RosterResult<Student> {
        self.check_student(index)?;
        let student = self.document.students.remove(index);
        self.ids.remove(index);
        self.dirty = true;

        debug!(
            "event=student_remove module=store status=ok index={} roster_len={}",
            index,
            self.document.students.len()
        );
        Ok(student)
    }

    /// Overwrites every period of one day.
    ///
    /// # Errors
    /// - `Index` for an unknown student, week or day.
    /// - `Validation` when `statuses` does not hold exactly one value per
    ///   period.
    pub fn set_day_statuses(
        &mut self,
        student: usize,
        week: usize,
        day: usize,
        statuses: Vec<PeriodStatus>,
    ) -> RosterResult<()> {
        self.check_student(student)?;
        if week >= self.calendar.total_weeks() {
            return Err(IndexError::Week {
                index: week,
                len: self.calendar.total_weeks(),
            }
            .into());
        }
        if day >= self.calendar.day_count() {
            return Err(IndexError::Day {
                index: day,
                len: self.calendar.day_count(),
            }
            .into());
        }
        if statuses.len() != self.calendar.periods_per_day() {
            return Err(ValidationError::PeriodCountMismatch {
                expected: self.calendar.periods_per_day(),
                actual: statuses.len(),
            }
            .into());
        }

        let slot = self.document.students[student]
            .attendance
            .day_mut(week, day)
            .ok_or(IndexError::Day {
                index: day,
                len: self.calendar.day_count(),
            })?;
        *slot = statuses;
        self.dirty = true;

        debug!("event=day_edit module=store status=ok student={student} week={week} day={day}");
        Ok(())
    }

    /// Sets the document label (trimmed).
    ///
    /// Returns `true` when the label changed; an unchanged label leaves the
    /// dirty flag alone.
    pub fn set_major(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if self.document.major == trimmed {
            return false;
        }
        self.document.major = trimmed.to_string();
        self.dirty = true;

        debug!("event=major_set module=store status=ok empty={}", trimmed.is_empty());
        true
    }

    /// Replaces the whole roster and label with `document`.
    ///
    /// Every record is normalized to the calendar first. Clears the dirty
    /// flag.
    pub fn load_document(&mut self, mut document: Document) {
        for student in &mut document.students {
            normalize_in_place(&mut student.attendance, &self.calendar);
        }
        document.weeks = self.calendar.total_weeks();

        self.ids = document.students.iter().map(|_| Uuid::new_v4()).collect();
        self.document = document;
        self.dirty = false;

        info!(
            "event=document_load module=store status=ok students={}",
            self.document.students.len()
        );
    }

    /// Record of the row at `index`.
    pub fn attendance(&self, index: usize) -> RosterResult<&AttendanceRecord> {
        self.check_student(index)?;
        Ok(&self.document.students[index].attendance)
    }

    pub(crate) fn mark_persisted(&mut self) {
        self.dirty = false;
    }

    fn check_student(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.document.students.len() {
            return Err(IndexError::Student {
                index,
                len: self.document.students.len(),
            });
        }
        Ok(())
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new(Calendar::default())
    }
}
