//! Attendance domain model.
//!
//! # Responsibility
//! - Define the calendar grid, per-period values and the roster document.
//! - Keep record shapes consistent with the active calendar.
//!
//! # Invariants
//! - Every record reachable from a store has exact calendar dimensions.
//! - Students are addressed positionally in the persisted document.

pub mod attendance;
pub mod calendar;
pub mod roster;
pub mod shape;
