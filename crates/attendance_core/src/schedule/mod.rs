//! Time source and autosave debouncing.
//!
//! # Responsibility
//! - Abstract wall-clock reads behind `Clock` so callers can drive time.
//! - Collapse bursts of edits into a single pending autosave deadline.

pub mod clock;
pub mod debounce;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::{Debouncer, DEFAULT_AUTOSAVE_DELAY_MS};
