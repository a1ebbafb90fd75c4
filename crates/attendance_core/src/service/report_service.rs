//! Week view projection.
//!
//! Builds the per-week table rows a view renders: roll number, name, one
//! status letter per day and the week/monthly/total percentages. Numbers
//! are recomputed from raw records on every call.

use crate::model::calendar::Calendar;
use crate::model::roster::IndexError;
use crate::service::roster_service::RosterStore;
use crate::stats::{day_status, monthly_percent, total_percent, week_percent, DayStatus};

/// One student's row in a week view.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    /// 1-based roll number.
    pub roll_no: usize,
    pub name: String,
    /// One entry per calendar day.
    pub days: Vec<DayStatus>,
    pub week_percent: f64,
    /// Set only on weeks that close a 4-week block.
    pub monthly_percent: Option<f64>,
    pub total_percent: f64,
}

/// Rows for one week tab.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub week: usize,
    pub show_monthly: bool,
    pub rows: Vec<WeekRow>,
}

impl WeekReport {
    /// Column headers matching `rows`.
    pub fn headers(&self, calendar: &Calendar) -> Vec<String> {
        let mut headers = vec!["RollNo".to_string(), "Name".to_string()];
        headers.extend(calendar.days().iter().cloned());
        headers.push("Week%".to_string());
        if self.show_monthly {
            headers.push("Monthly%".to_string());
        }
        headers.push("Total%".to_string());
        headers
    }
}

/// Builds the view rows for `week`.
pub fn week_report(store: &RosterStore, week: usize) -> Result<WeekReport, IndexError> {
    let calendar = store.calendar();
    if week >= calendar.total_weeks() {
        return Err(IndexError::Week {
            index: week,
            len: calendar.total_weeks(),
        });
    }
    let show_monthly = calendar.closes_block(week);

    let rows = store
        .students()
        .iter()
        .enumerate()
        .map(|(index, student)| {
            let record = &student.attendance;
            let days = (0..calendar.day_count())
                .map(|day| record.day(week, day).map(day_status).unwrap_or(DayStatus::Blank))
                .collect();
            WeekRow {
                roll_no: index + 1,
                name: student.name.clone(),
                days,
                week_percent: week_percent(record, calendar, week).unwrap_or(0.0),
                monthly_percent: if show_monthly {
                    monthly_percent(record, calendar, week)
                } else {
                    None
                },
                total_percent: total_percent(record, calendar),
            }
        })
        .collect();

    Ok(WeekReport {
        week,
        show_monthly,
        rows,
    })
}

/// Renders a ratio as a whole-number percentage, e.g. `20%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.0}%")
}

#[cfg(test)]
mod tests {
    use super::{format_percent, week_report};
    use crate::model::roster::IndexError;
    use crate::service::roster_service::RosterStore;

    #[test]
    fn format_percent_rounds_to_whole_numbers() {
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_percent(33.333), "33%");
        assert_eq!(format_percent(66.7), "67%");
    }

    #[test]
    fn monthly_column_only_on_block_closing_weeks() {
        let mut store = RosterStore::default();
        store.add_student("Aye").unwrap();

        let week_three = week_report(&store, 2).unwrap();
        assert!(!week_three.show_monthly);
        assert_eq!(week_three.rows[0].monthly_percent, None);
        assert_eq!(week_three.headers(store.calendar()).len(), 9);

        let week_four = week_report(&store, 3).unwrap();
        assert!(week_four.show_monthly);
        assert_eq!(week_four.rows[0].monthly_percent, Some(0.0));
        assert_eq!(week_four.headers(store.calendar())[8], "Monthly%");
    }

    #[test]
    fn out_of_range_week_is_rejected() {
        let store = RosterStore::default();
        assert_eq!(
            week_report(&store, 16).unwrap_err(),
            IndexError::Week { index: 16, len: 16 }
        );
    }
}
