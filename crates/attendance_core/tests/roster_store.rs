use attendance_core::{
    Calendar, Document, IndexError, PeriodStatus, RosterError, RosterStore, Student,
    ValidationError,
};

use PeriodStatus::{Absent, Present, Unmarked};

fn store_with(names: &[&str]) -> RosterStore {
    let mut store = RosterStore::new(Calendar::default());
    let document = Document {
        major: String::new(),
        weeks: 16,
        students: names
            .iter()
            .map(|name| Student::new(name, &Calendar::default()).unwrap())
            .collect(),
    };
    store.load_document(document);
    store
}

#[test]
fn add_student_appends_trimmed_name_with_empty_record() {
    let mut store = RosterStore::default();
    assert!(!store.is_dirty());

    let index = store.add_student("  Su Su ").unwrap();
    assert_eq!(index, 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.student(0).unwrap().name, "Su Su");
    assert!(store.student(0).unwrap().attendance.matches(store.calendar()));
    assert!(store.is_dirty());
}

#[test]
fn add_blank_student_leaves_roster_and_dirty_flag_alone() {
    let mut store = RosterStore::default();
    let err = store.add_student("   ").unwrap_err();
    assert_eq!(err, RosterError::Validation(ValidationError::BlankName));
    assert!(store.is_empty());
    assert!(!store.is_dirty());

    let mut dirty_store = RosterStore::default();
    dirty_store.add_student("Aye").unwrap();
    dirty_store.add_student("").unwrap_err();
    assert_eq!(dirty_store.len(), 1);
    assert!(dirty_store.is_dirty());
}

#[test]
fn rename_checks_index_then_name() {
    let mut store = store_with(&["Aye", "Bo"]);

    assert_eq!(
        store.rename_student(2, "Cho").unwrap_err(),
        RosterError::Index(IndexError::Student { index: 2, len: 2 })
    );
    assert_eq!(
        store.rename_student(1, " \t").unwrap_err(),
        RosterError::Validation(ValidationError::BlankName)
    );
    assert!(!store.is_dirty());

    store.rename_student(1, " Bo Bo ").unwrap();
    assert_eq!(store.student(1).unwrap().name, "Bo Bo");
    assert!(store.is_dirty());
}

#[test]
fn set_day_statuses_replaces_whole_day() {
    let mut store = store_with(&["Aye"]);
    let first = vec![Present, Present, Absent, Unmarked, Present, Present, Present];
    store.set_day_statuses(0, 4, 2, first).unwrap();

    let second = vec![Absent, Unmarked, Unmarked, Unmarked, Unmarked, Unmarked, Unmarked];
    store.set_day_statuses(0, 4, 2, second.clone()).unwrap();

    let record = store.attendance(0).unwrap();
    assert_eq!(record.day(4, 2).unwrap(), second.as_slice());
    assert_eq!(record.day(4, 1).unwrap(), &[Unmarked; 7]);
    assert!(store.is_dirty());
}

#[test]
fn set_day_statuses_rejects_bad_input_without_change() {
    let mut store = store_with(&["Aye"]);
    let full_day = vec![Present; 7];

    assert_eq!(
        store.set_day_statuses(1, 0, 0, full_day.clone()).unwrap_err(),
        RosterError::Index(IndexError::Student { index: 1, len: 1 })
    );
    assert_eq!(
        store.set_day_statuses(0, 16, 0, full_day.clone()).unwrap_err(),
        RosterError::Index(IndexError::Week { index: 16, len: 16 })
    );
    assert_eq!(
        store.set_day_statuses(0, 0, 5, full_day).unwrap_err(),
        RosterError::Index(IndexError::Day { index: 5, len: 5 })
    );
    assert_eq!(
        store.set_day_statuses(0, 0, 0, vec![Present; 6]).unwrap_err(),
        RosterError::Validation(ValidationError::PeriodCountMismatch {
            expected: 7,
            actual: 6
        })
    );

    assert!(!store.is_dirty());
    assert_eq!(store.attendance(0).unwrap().day(0, 0).unwrap(), &[Unmarked; 7]);
}

#[test]
fn set_major_marks_dirty_only_on_change() {
    let mut store = RosterStore::default();
    assert!(!store.set_major("   "));
    assert!(!store.is_dirty());

    assert!(store.set_major(" Chemistry "));
    assert_eq!(store.major(), "Chemistry");
    assert!(store.is_dirty());

    let mut loaded = store_with(&[]);
    loaded.set_major("");
    assert!(!loaded.is_dirty());
}

#[test]
fn load_document_replaces_roster_normalizes_and_clears_dirty() {
    let mut store = RosterStore::default();
    store.add_student("Old").unwrap();
    store.set_major("Old major");

    let calendar = Calendar::default();
    let mut short = Student::new("New", &calendar).unwrap();
    short.attendance = attendance_core::AttendanceRecord::from_weeks(vec![vec![vec![Present]]]);
    store.load_document(Document {
        major: "Biology".to_string(),
        weeks: 1,
        students: vec![short],
    });

    assert!(!store.is_dirty());
    assert_eq!(store.major(), "Biology");
    assert_eq!(store.len(), 1);
    assert_eq!(store.document().weeks, 16);
    let record = store.attendance(0).unwrap();
    assert!(record.matches(&calendar));
    assert_eq!(record.day(0, 0).unwrap()[0], Present);
}
