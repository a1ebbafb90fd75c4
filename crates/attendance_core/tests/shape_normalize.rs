use attendance_core::{normalize, AttendanceRecord, Calendar, PeriodStatus};

use PeriodStatus::{Absent, Present, Unmarked};

fn calendars() -> Vec<Calendar> {
    vec![
        Calendar::default(),
        Calendar::new(3, vec!["Mon".into(), "Wed".into()], 2).unwrap(),
        Calendar::new(1, Vec::new(), 1).unwrap(),
    ]
}

fn sample_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord::default(),
        AttendanceRecord::from_weeks(vec![vec![vec![Present, Absent]]]),
        AttendanceRecord::from_weeks(vec![
            vec![vec![Absent; 9]; 7];
            20
        ]),
        AttendanceRecord::from_weeks(vec![
            vec![],
            vec![vec![], vec![Present]],
            vec![vec![Absent, Present, Unmarked, Present]; 3],
        ]),
    ]
}

#[test]
fn normalize_always_produces_calendar_shape() {
    for calendar in calendars() {
        for record in sample_records() {
            let normalized = normalize(record, &calendar);
            assert!(normalized.matches(&calendar));
            assert_eq!(normalized.weeks().len(), calendar.total_weeks());
            for days in normalized.weeks() {
                assert_eq!(days.len(), calendar.day_count());
                for periods in days {
                    assert_eq!(periods.len(), calendar.periods_per_day());
                }
            }
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    for calendar in calendars() {
        for record in sample_records() {
            let once = normalize(record, &calendar);
            let twice = normalize(once.clone(), &calendar);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn normalize_keeps_values_at_surviving_positions() {
    let calendar = Calendar::new(2, vec!["Mon".into(), "Tue".into()], 3).unwrap();
    let record = AttendanceRecord::from_weeks(vec![vec![
        vec![Present, Absent],
        vec![Absent, Present, Present, Absent],
    ]]);

    let normalized = normalize(record, &calendar);
    assert_eq!(normalized.day(0, 0).unwrap(), &[Present, Absent, Unmarked]);
    assert_eq!(normalized.day(0, 1).unwrap(), &[Absent, Present, Present]);
    assert_eq!(normalized.day(1, 1).unwrap(), &[Unmarked; 3]);
}

#[test]
fn normalize_of_well_shaped_record_is_noop() {
    let calendar = Calendar::default();
    let mut weeks = AttendanceRecord::empty(&calendar).into_weeks();
    weeks[5][2] = vec![Present, Present, Absent, Unmarked, Present, Absent, Absent];
    let record = AttendanceRecord::from_weeks(weeks);

    assert_eq!(normalize(record.clone(), &calendar), record);
}
