//! Academic calendar configuration.
//!
//! # Responsibility
//! - Define the `weeks x days x periods` grid every attendance record uses.
//! - Validate startup configuration before any record is shaped by it.
//!
//! # Invariants
//! - `total_weeks > 0` and `periods_per_day > 0` for every constructed value.
//! - Day labels are non-blank after trimming.
//! - A calendar is immutable once a store has been built from it.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of weeks in a term.
pub const DEFAULT_TOTAL_WEEKS: usize = 16;
/// Default number of periods in one school day.
pub const DEFAULT_PERIODS_PER_DAY: usize = 7;
/// Default weekday labels.
pub const DEFAULT_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Number of consecutive weeks grouped into one "monthly" block.
pub const WEEKS_PER_BLOCK: usize = 4;

/// Calendar configuration validation error.
#[derive(Debug)]
pub enum CalendarError {
    /// `total_weeks` must be positive.
    ZeroWeeks,
    /// `periods_per_day` must be positive.
    ZeroPeriods,
    /// Day label at the given position is blank.
    BlankDayLabel(usize),
    /// Calendar config document could not be parsed.
    Parse(serde_json::Error),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroWeeks => write!(f, "calendar must have at least one week"),
            Self::ZeroPeriods => write!(f, "calendar must have at least one period per day"),
            Self::BlankDayLabel(index) => write!(f, "day label at position {index} is blank"),
            Self::Parse(err) => write!(f, "invalid calendar config: {err}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Fixed academic calendar shared by every record in a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    total_weeks: usize,
    days: Vec<String>,
    periods_per_day: usize,
}

/// On-disk calendar config; missing fields fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CalendarConfig {
    total_weeks: Option<usize>,
    days: Option<Vec<String>>,
    periods_per_day: Option<usize>,
}

impl Calendar {
    /// Builds a validated calendar.
    ///
    /// # Errors
    /// - `ZeroWeeks` / `ZeroPeriods` for empty axes.
    /// - `BlankDayLabel` when a label trims to nothing.
    pub fn new(
        total_weeks: usize,
        days: Vec<String>,
        periods_per_day: usize,
    ) -> Result<Self, CalendarError> {
        if total_weeks == 0 {
            return Err(CalendarError::ZeroWeeks);
        }
        if periods_per_day == 0 {
            return Err(CalendarError::ZeroPeriods);
        }
        let mut labels = Vec::with_capacity(days.len());
        for (index, label) in days.into_iter().enumerate() {
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(CalendarError::BlankDayLabel(index));
            }
            labels.push(trimmed.to_string());
        }

        Ok(Self {
            total_weeks,
            days: labels,
            periods_per_day,
        })
    }

    /// Parses a JSON calendar config such as
    /// `{"total_weeks": 12, "days": ["Mon", "Wed"], "periods_per_day": 6}`.
    pub fn from_json_str(text: &str) -> Result<Self, CalendarError> {
        let config: CalendarConfig = serde_json::from_str(text)?;
        let defaults = Self::default();
        Self::new(
            config.total_weeks.unwrap_or(defaults.total_weeks),
            config.days.unwrap_or(defaults.days),
            config.periods_per_day.unwrap_or(defaults.periods_per_day),
        )
    }

    pub fn total_weeks(&self) -> usize {
        self.total_weeks
    }

    /// Ordered weekday labels.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    /// Period slots in one week (`days x periods`).
    pub fn slots_per_week(&self) -> usize {
        self.days.len() * self.periods_per_day
    }

    /// Period slots across the whole term.
    pub fn total_slots(&self) -> usize {
        self.total_weeks * self.slots_per_week()
    }

    /// Returns the `[start, end)` week range of the block containing `week`.
    ///
    /// Blocks start at week 0 and span `WEEKS_PER_BLOCK` weeks; the last block
    /// is clipped to `total_weeks`. Returns `None` for an out-of-range week.
    pub fn block_bounds(&self, week: usize) -> Option<(usize, usize)> {
        if week >= self.total_weeks {
            return None;
        }
        let start = (week / WEEKS_PER_BLOCK) * WEEKS_PER_BLOCK;
        let end = (start + WEEKS_PER_BLOCK).min(self.total_weeks);
        Some((start, end))
    }

    /// Whether `week` is the last week of a full block, where the monthly
    /// rollup is shown.
    pub fn closes_block(&self, week: usize) -> bool {
        (week + 1) % WEEKS_PER_BLOCK == 0
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            total_weeks: DEFAULT_TOTAL_WEEKS,
            days: DEFAULT_DAYS.iter().map(|day| day.to_string()).collect(),
            periods_per_day: DEFAULT_PERIODS_PER_DAY,
        }
    }
}
