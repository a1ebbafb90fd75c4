//! Presence ratios at week, block and term granularity.
//!
//! Results are `100 * present / slots` where `slots` is the full calendar
//! slot count of the range. Unmarked and absent periods both count against
//! the ratio. A range with zero slots yields `0.0`.

use crate::model::attendance::{AttendanceRecord, DayPeriods, PeriodStatus};
use crate::model::calendar::Calendar;

/// Presence ratio of one week.
///
/// Returns `None` when `week` is outside the calendar.
pub fn week_percent(record: &AttendanceRecord, calendar: &Calendar, week: usize) -> Option<f64> {
    if week >= calendar.total_weeks() {
        return None;
    }
    let present = record.week(week).map(count_present).unwrap_or(0);
    Some(ratio(present, calendar.slots_per_week()))
}

/// Presence ratio of the 4-week block containing `week`.
///
/// Blocks are `[4k, 4k + 4)` clipped to the term length, so the last block
/// may be shorter. Returns `None` when `week` is outside the calendar.
pub fn monthly_percent(
    record: &AttendanceRecord,
    calendar: &Calendar,
    week: usize,
) -> Option<f64> {
    let (start, end) = calendar.block_bounds(week)?;
    let present: usize = (start..end)
        .filter_map(|index| record.week(index))
        .map(count_present)
        .sum();
    Some(ratio(present, (end - start) * calendar.slots_per_week()))
}

/// Presence ratio across the whole term.
pub fn total_percent(record: &AttendanceRecord, calendar: &Calendar) -> f64 {
    let present: usize = record
        .weeks()
        .iter()
        .take(calendar.total_weeks())
        .map(|days| count_present(days))
        .sum();
    ratio(present, calendar.total_slots())
}

fn count_present(days: &[DayPeriods]) -> usize {
    days.iter()
        .flat_map(|periods| periods.iter())
        .filter(|status| **status == PeriodStatus::Present)
        .count()
}

fn ratio(present: usize, slots: usize) -> f64 {
    if slots == 0 {
        return 0.0;
    }
    present as f64 * 100.0 / slots as f64
}
