//! Statistics engine.
//!
//! # Responsibility
//! - Classify single days and compute week, block ("monthly") and term
//!   presence ratios from raw records.
//!
//! # Invariants
//! - All functions are pure: no mutation, no I/O, no caching.
//! - Percentages are unrounded; rounding is a display concern.
//! - Denominators count every calendar slot, marked or not.

pub mod day;
pub mod percent;

pub use day::{day_status, DayStatus};
pub use percent::{monthly_percent, total_percent, week_percent};
