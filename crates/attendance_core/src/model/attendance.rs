//! Per-period attendance values and the per-student record grid.
//!
//! # Responsibility
//! - Define the tri-state `PeriodStatus` and its wire encoding.
//! - Hold one student's `[week][day][period]` grid.
//!
//! # Invariants
//! - Wire encoding is `null` (unmarked), `1` (present), `0` (absent); any
//!   other value is rejected on decode.
//! - A record reachable from a store always matches its calendar shape
//!   (see `model::shape`).

use crate::model::calendar::Calendar;
use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Attendance value for one period of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PeriodStatus {
    /// Not recorded yet.
    #[default]
    Unmarked,
    Present,
    Absent,
}

impl PeriodStatus {
    /// Parses the single-letter form used by editors: `P`, `A`, `-`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'P' | '1' => Some(Self::Present),
            'A' | '0' => Some(Self::Absent),
            '-' | '.' | '_' => Some(Self::Unmarked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Unmarked => '-',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }
}

impl Serialize for PeriodStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unmarked => serializer.serialize_none(),
            Self::Present => serializer.serialize_u8(1),
            Self::Absent => serializer.serialize_u8(0),
        }
    }
}

impl<'de> Deserialize<'de> for PeriodStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<u8>::deserialize(deserializer)? {
            None => Ok(Self::Unmarked),
            Some(1) => Ok(Self::Present),
            Some(0) => Ok(Self::Absent),
            Some(other) => Err(de::Error::invalid_value(
                Unexpected::Unsigned(u64::from(other)),
                &"null, 0 or 1",
            )),
        }
    }
}

/// One day's period values.
pub type DayPeriods = Vec<PeriodStatus>;
/// One week's days.
pub type WeekDays = Vec<DayPeriods>;

/// A student's full attendance grid indexed `[week][day][period]`.
///
/// Serialized transparently as nested arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceRecord(Vec<WeekDays>);

impl AttendanceRecord {
    /// Creates an all-`Unmarked` record shaped for `calendar`.
    pub fn empty(calendar: &Calendar) -> Self {
        Self(vec![empty_week(calendar); calendar.total_weeks()])
    }

    /// Wraps raw nested data without reshaping it.
    pub fn from_weeks(weeks: Vec<WeekDays>) -> Self {
        Self(weeks)
    }

    pub fn weeks(&self) -> &[WeekDays] {
        &self.0
    }

    pub fn week(&self, week: usize) -> Option<&[DayPeriods]> {
        self.0.get(week).map(Vec::as_slice)
    }

    pub fn day(&self, week: usize, day: usize) -> Option<&[PeriodStatus]> {
        self.0
            .get(week)
            .and_then(|days| days.get(day))
            .map(Vec::as_slice)
    }

    /// Whether every axis has exactly the calendar's length.
    pub fn matches(&self, calendar: &Calendar) -> bool {
        self.0.len() == calendar.total_weeks()
            && self.0.iter().all(|days| {
                days.len() == calendar.day_count()
                    && days
                        .iter()
                        .all(|periods| periods.len() == calendar.periods_per_day())
            })
    }

    pub(crate) fn weeks_mut(&mut self) -> &mut Vec<WeekDays> {
        &mut self.0
    }

    pub(crate) fn day_mut(&mut self, week: usize, day: usize) -> Option<&mut DayPeriods> {
        self.0.get_mut(week).and_then(|days| days.get_mut(day))
    }

    pub fn into_weeks(self) -> Vec<WeekDays> {
        self.0
    }
}

pub(crate) fn empty_day(calendar: &Calendar) -> DayPeriods {
    vec![PeriodStatus::Unmarked; calendar.periods_per_day()]
}

pub(crate) fn empty_week(calendar: &Calendar) -> WeekDays {
    vec![empty_day(calendar); calendar.day_count()]
}
