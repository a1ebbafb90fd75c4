//! Day-level status classification.

use crate::model::attendance::PeriodStatus;
use std::fmt::{Display, Formatter};

/// Summary of one day's periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    /// No period is marked.
    Blank,
    /// Every marked period is present.
    Full,
    /// Every marked period is absent.
    Empty,
    /// Marked periods disagree.
    Mixed,
}

impl DayStatus {
    /// Short label used in week views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Blank => "-",
            Self::Full => "P",
            Self::Empty => "A",
            Self::Mixed => "Mix",
        }
    }
}

impl Display for DayStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies one day's period values.
///
/// Unmarked periods never block `Full`/`Empty`: `[P, P, -, -]` is `Full`.
/// Only disagreement among marked periods yields `Mixed`.
pub fn day_status(periods: &[PeriodStatus]) -> DayStatus {
    let mut present = false;
    let mut absent = false;
    for status in periods {
        match status {
            PeriodStatus::Present => present = true,
            PeriodStatus::Absent => absent = true,
            PeriodStatus::Unmarked => {}
        }
    }

    match (present, absent) {
        (false, false) => DayStatus::Blank,
        (true, false) => DayStatus::Full,
        (false, true) => DayStatus::Empty,
        (true, true) => DayStatus::Mixed,
    }
}
