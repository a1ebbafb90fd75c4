//! Shape normalizer for attendance records.
//!
//! # Responsibility
//! - Repair records whose dimensions differ from the active calendar,
//!   e.g. documents written under another configuration.
//!
//! # Invariants
//! - Output always has exact dimensions `weeks x days x periods`.
//! - Padding uses `Unmarked`; truncation drops the tail. Existing values at
//!   surviving positions are never altered.
//! - Normalizing a correctly shaped record is a no-op.

use crate::model::attendance::{empty_day, empty_week, AttendanceRecord, PeriodStatus};
use crate::model::calendar::Calendar;

/// Returns `record` reshaped to match `calendar`.
pub fn normalize(mut record: AttendanceRecord, calendar: &Calendar) -> AttendanceRecord {
    normalize_in_place(&mut record, calendar);
    record
}

/// Reshapes `record` to match `calendar`.
///
/// Returns `true` when anything had to change.
pub fn normalize_in_place(record: &mut AttendanceRecord, calendar: &Calendar) -> bool {
    if record.matches(calendar) {
        return false;
    }

    let weeks = record.weeks_mut();
    weeks.resize_with(calendar.total_weeks(), || empty_week(calendar));
    for days in weeks.iter_mut() {
        days.resize_with(calendar.day_count(), || empty_day(calendar));
        for periods in days.iter_mut() {
            periods.resize(calendar.periods_per_day(), PeriodStatus::Unmarked);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::model::attendance::{AttendanceRecord, PeriodStatus};
    use crate::model::calendar::Calendar;

    use PeriodStatus::{Absent, Present, Unmarked};

    fn tiny_calendar() -> Calendar {
        Calendar::new(2, vec!["Mon".into(), "Tue".into()], 3).unwrap()
    }

    #[test]
    fn pads_every_axis_with_unmarked() {
        let record = AttendanceRecord::from_weeks(vec![vec![vec![Present]]]);
        let normalized = normalize(record, &tiny_calendar());

        assert!(normalized.matches(&tiny_calendar()));
        assert_eq!(
            normalized.day(0, 0).unwrap(),
            &[Present, Unmarked, Unmarked]
        );
        assert_eq!(normalized.day(0, 1).unwrap(), &[Unmarked; 3]);
        assert_eq!(normalized.week(1).unwrap(), &[vec![Unmarked; 3], vec![Unmarked; 3]]);
    }

    #[test]
    fn truncates_excess_from_the_tail() {
        let oversized = vec![vec![vec![Absent, Present, Present, Present]; 4]; 5];
        let normalized = normalize(AttendanceRecord::from_weeks(oversized), &tiny_calendar());

        assert_eq!(normalized.weeks().len(), 2);
        assert_eq!(normalized.day(1, 1).unwrap(), &[Absent, Present, Present]);
    }

    #[test]
    fn ragged_inner_axes_are_fixed_independently() {
        let ragged = vec![
            vec![vec![Present; 5]],
            vec![vec![], vec![Absent], vec![Present; 3]],
        ];
        let calendar = tiny_calendar();
        let normalized = normalize(AttendanceRecord::from_weeks(ragged), &calendar);

        assert!(normalized.matches(&calendar));
        assert_eq!(normalized.day(0, 0).unwrap(), &[Present; 3]);
        assert_eq!(normalized.day(1, 0).unwrap(), &[Unmarked; 3]);
        assert_eq!(normalized.day(1, 1).unwrap(), &[Absent, Unmarked, Unmarked]);
    }
}
