//! Command-line arguments for the attendance tool.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "attendance")]
#[command(version)]
#[command(about = "Record per-period class attendance and report presence", long_about = None)]
pub struct Cli {
    /// Number of weeks in the term
    #[arg(long, value_name = "N")]
    pub weeks: Option<usize>,

    /// Comma-separated weekday labels (e.g. Mon,Tue,Wed,Thu,Fri)
    #[arg(long, value_name = "LABELS", value_delimiter = ',')]
    pub days: Option<Vec<String>>,

    /// Periods per day
    #[arg(long, value_name = "N")]
    pub periods: Option<usize>,

    /// JSON calendar config file; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    pub calendar: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when omitted
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty attendance document
    Init {
        file: PathBuf,
        /// Course/major label
        #[arg(long)]
        major: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Append students to the roster
    Add {
        file: PathBuf,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Rename the student at a roll number
    Rename {
        file: PathBuf,
        roll: usize,
        name: String,
    },
    /// Remove the student at a roll number
    Remove { file: PathBuf, roll: usize },
    /// Replace one day's periods, e.g. `mark class.attend 3 1 Mon PPA----`
    Mark {
        file: PathBuf,
        roll: usize,
        /// 1-based week number
        week: usize,
        /// Day label or 1-based day number
        day: String,
        /// One letter per period: P present, A absent, - unmarked
        periods: String,
    },
    /// Set the course/major label
    Major { file: PathBuf, label: String },
    /// Print the week view
    Report {
        file: PathBuf,
        /// 1-based week number; every week when omitted
        #[arg(long)]
        week: Option<usize>,
    },
}

impl Command {
    pub fn file(&self) -> &Path {
        match self {
            Self::Init { file, .. }
            | Self::Add { file, .. }
            | Self::Rename { file, .. }
            | Self::Remove { file, .. }
            | Self::Mark { file, .. }
            | Self::Major { file, .. }
            | Self::Report { file, .. } => file,
        }
    }
}
