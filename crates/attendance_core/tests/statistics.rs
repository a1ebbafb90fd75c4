use attendance_core::{
    day_status, monthly_percent, total_percent, week_percent, AttendanceRecord, Calendar,
    DayStatus, PeriodStatus,
};

use PeriodStatus::{Absent, Present, Unmarked};

fn record_with(
    calendar: &Calendar,
    marks: &[(usize, usize, Vec<PeriodStatus>)],
) -> AttendanceRecord {
    let mut weeks = AttendanceRecord::empty(calendar).into_weeks();
    for (week, day, periods) in marks {
        weeks[*week][*day] = periods.clone();
    }
    AttendanceRecord::from_weeks(weeks)
}

#[test]
fn day_status_classifies_seven_period_days() {
    assert_eq!(day_status(&[Unmarked; 7]), DayStatus::Blank);
    assert_eq!(day_status(&[Present; 7]), DayStatus::Full);
    assert_eq!(day_status(&[Absent; 7]), DayStatus::Empty);
    assert_eq!(
        day_status(&[Present, Absent, Unmarked, Unmarked, Unmarked, Unmarked, Unmarked]),
        DayStatus::Mixed
    );
    assert_eq!(
        day_status(&[Present, Present, Unmarked, Unmarked, Unmarked, Unmarked, Unmarked]),
        DayStatus::Full
    );
}

#[test]
fn week_percent_counts_unmarked_against_presence() {
    let calendar = Calendar::default();
    let record = record_with(&calendar, &[(2, 0, vec![Present; 7])]);

    assert_eq!(week_percent(&record, &calendar, 2), Some(20.0));
    assert_eq!(week_percent(&record, &calendar, 3), Some(0.0));
}

#[test]
fn week_percent_ignores_absent_and_unmarked_alike() {
    let calendar = Calendar::default();
    let record = record_with(
        &calendar,
        &[
            (0, 0, vec![Present; 7]),
            (0, 1, vec![Absent; 7]),
            (0, 2, vec![Present, Absent, Unmarked, Unmarked, Unmarked, Unmarked, Unmarked]),
        ],
    );

    let percent = week_percent(&record, &calendar, 0).unwrap();
    assert!((percent - 800.0 / 35.0).abs() < 1e-9);
}

#[test]
fn monthly_blocks_are_fixed_four_week_windows() {
    let calendar = Calendar::default();
    assert_eq!(calendar.block_bounds(0), calendar.block_bounds(3));
    assert_ne!(calendar.block_bounds(3), calendar.block_bounds(4));

    let record = record_with(&calendar, &[(0, 0, vec![Present; 7])]);
    assert_eq!(monthly_percent(&record, &calendar, 0), Some(5.0));
    assert_eq!(monthly_percent(&record, &calendar, 3), Some(5.0));
    assert_eq!(monthly_percent(&record, &calendar, 4), Some(0.0));
}

#[test]
fn total_percent_spans_whole_term() {
    let calendar = Calendar::default();
    let all_present = AttendanceRecord::from_weeks(vec![vec![vec![Present; 7]; 5]; 16]);
    let untouched = AttendanceRecord::empty(&calendar);

    assert_eq!(total_percent(&all_present, &calendar), 100.0);
    assert_eq!(total_percent(&untouched, &calendar), 0.0);

    let one_week = record_with(
        &calendar,
        &(0..5).map(|day| (7, day, vec![Present; 7])).collect::<Vec<_>>(),
    );
    assert_eq!(total_percent(&one_week, &calendar), 6.25);
}
