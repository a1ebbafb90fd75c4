//! Command-line front end for `attendance_core`.
//!
//! # Responsibility
//! - Parse arguments into one roster action against a document file.
//! - Go through the same session contract a graphical front end uses:
//!   open, mutate, save to the known location.

mod cli;

use anyhow::{anyhow, bail, Context, Result};
use attendance_core::{
    default_log_level, format_percent, init_logging, init_stderr_logging, week_report, Calendar,
    EditingSession, NoPrompt, PeriodStatus, SaveOutcome,
};
use clap::Parser;
use cli::{Cli, Command};
use log::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logging(&cli)?;
    let calendar = resolve_calendar(&cli)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        attendance_core::core_version()
    );
    run(cli.command, calendar)
}

fn init_cli_logging(cli: &Cli) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    match cli.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir)?,
        None if cli.log_level.is_some() => init_stderr_logging(level)?,
        None => {}
    }
    Ok(())
}

fn resolve_calendar(cli: &Cli) -> Result<Calendar> {
    let base = match &cli.calendar {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read calendar config {}", path.display()))?;
            Calendar::from_json_str(&text)?
        }
        None => Calendar::default(),
    };
    if cli.weeks.is_none() && cli.days.is_none() && cli.periods.is_none() {
        return Ok(base);
    }
    let calendar = Calendar::new(
        cli.weeks.unwrap_or(base.total_weeks()),
        cli.days.clone().unwrap_or_else(|| base.days().to_vec()),
        cli.periods.unwrap_or(base.periods_per_day()),
    )?;
    Ok(calendar)
}

fn run(command: Command, calendar: Calendar) -> Result<()> {
    let mut session = EditingSession::new(calendar);

    if let Command::Init { file, major, force } = &command {
        if file.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", file.display());
        }
        if let Some(label) = major {
            session.set_major(label);
        }
        session.save_as(file)?;
        println!("created {}", file.display());
        return Ok(());
    }

    let file = command.file().to_path_buf();
    session
        .open(&file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    match command {
        Command::Init { .. } => bail!("init cannot target an open document"),
        Command::Add { names, .. } => {
            for name in &names {
                let index = session.add_student(name)?;
                println!("{:>3}  {}", index + 1, name.trim());
            }
        }
        Command::Rename { roll, name, .. } => {
            session.rename_student(roll_index(roll)?, &name)?;
        }
        Command::Remove { roll, .. } => {
            let removed = session.remove_student(roll_index(roll)?)?;
            println!("removed {}", removed.name);
        }
        Command::Mark {
            roll,
            week,
            day,
            periods,
            ..
        } => {
            let calendar = session.store().calendar();
            let week = week
                .checked_sub(1)
                .ok_or_else(|| anyhow!("week numbers start at 1"))?;
            let day = day_index(calendar, &day)?;
            let statuses = parse_periods(&periods)?;
            session.set_day_statuses(roll_index(roll)?, week, day, statuses)?;
        }
        Command::Major { label, .. } => {
            if !session.set_major(&label) {
                println!("major unchanged");
            }
        }
        Command::Report { week, .. } => {
            let weeks = match week {
                Some(number) => {
                    let index = number
                        .checked_sub(1)
                        .ok_or_else(|| anyhow!("week numbers start at 1"))?;
                    vec![index]
                }
                None => (0..session.store().calendar().total_weeks()).collect(),
            };
            print_title(&session);
            for week in weeks {
                print_week(&session, week)?;
            }
        }
    }

    match session.save(NoPrompt)? {
        SaveOutcome::Saved(path) => println!("saved {}", path.display()),
        SaveOutcome::Clean | SaveOutcome::Cancelled => {}
    }
    Ok(())
}

fn roll_index(roll: usize) -> Result<usize> {
    roll.checked_sub(1)
        .ok_or_else(|| anyhow!("roll numbers start at 1"))
}

fn day_index(calendar: &Calendar, day: &str) -> Result<usize> {
    if let Ok(number) = day.parse::<usize>() {
        return number
            .checked_sub(1)
            .ok_or_else(|| anyhow!("day numbers start at 1"));
    }
    calendar
        .days()
        .iter()
        .position(|label| label.eq_ignore_ascii_case(day.trim()))
        .ok_or_else(|| anyhow!("unknown day `{day}`; expected one of {:?}", calendar.days()))
}

fn parse_periods(text: &str) -> Result<Vec<PeriodStatus>> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            PeriodStatus::from_symbol(ch)
                .ok_or_else(|| anyhow!("invalid period symbol `{ch}`; use P, A or -"))
        })
        .collect()
}

fn print_title(session: &EditingSession) {
    println!("{}", session.window_title());
}

fn print_week(session: &EditingSession, week: usize) -> Result<()> {
    let store = session.store();
    let report = week_report(store, week)?;
    println!();
    println!("Week {}", week + 1);
    println!("{}", report.headers(store.calendar()).join("\t"));
    for row in &report.rows {
        let mut cells = vec![row.roll_no.to_string(), row.name.clone()];
        cells.extend(row.days.iter().map(ToString::to_string));
        cells.push(format_percent(row.week_percent));
        if let Some(monthly) = row.monthly_percent {
            cells.push(format_percent(monthly));
        }
        cells.push(format_percent(row.total_percent));
        println!("{}", cells.join("\t"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{day_index, parse_periods, roll_index};
    use attendance_core::{Calendar, PeriodStatus};

    #[test]
    fn parse_periods_reads_editor_letters() {
        assert_eq!(
            parse_periods("PA -").unwrap(),
            vec![
                PeriodStatus::Present,
                PeriodStatus::Absent,
                PeriodStatus::Unmarked
            ]
        );
        assert!(parse_periods("PX").is_err());
    }

    #[test]
    fn day_index_accepts_labels_and_numbers() {
        let calendar = Calendar::default();
        assert_eq!(day_index(&calendar, "wed").unwrap(), 2);
        assert_eq!(day_index(&calendar, "5").unwrap(), 4);
        assert!(day_index(&calendar, "0").is_err());
        assert!(day_index(&calendar, "Sun").is_err());
    }

    #[test]
    fn roll_numbers_are_one_based() {
        assert_eq!(roll_index(1).unwrap(), 0);
        assert!(roll_index(0).is_err());
    }
}
