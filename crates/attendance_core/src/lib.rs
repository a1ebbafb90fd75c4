//! Core domain logic for class attendance tracking.
//! This crate is the single source of truth for roster and attendance
//! invariants; presentation layers only call into it.

pub mod codec;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod stats;

pub use codec::{deserialize, read_document, serialize, write_document, FormatError, PersistError};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget, LoggingError,
};
pub use model::attendance::{AttendanceRecord, PeriodStatus};
pub use model::calendar::{Calendar, CalendarError};
pub use model::roster::{Document, IndexError, Student, StudentId, ValidationError};
pub use model::shape::normalize;
pub use schedule::{Clock, ManualClock, SystemClock};
pub use service::report_service::{format_percent, week_report, WeekReport, WeekRow};
pub use service::roster_service::{RosterError, RosterResult, RosterStore};
pub use service::session_service::{
    AutosaveOutcome, CloseDecision, CloseOutcome, EditingSession, FixedLocation, LocationPrompt,
    NoPrompt, SaveOutcome,
};
pub use stats::{day_status, monthly_percent, total_percent, week_percent, DayStatus};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
