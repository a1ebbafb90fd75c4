//! Editing session: store + document location + debounced autosave.
//!
//! # Responsibility
//! - Route every roster mutation through the store and re-arm autosave.
//! - Drive explicit save, autosave, open and close against a location
//!   supplied by the presentation layer.
//!
//! # Invariants
//! - The dirty flag clears only after a successful write or open.
//! - A burst of mutations produces at most one autosave attempt.
//! - Autosave failures are logged, never surfaced; the document stays dirty
//!   and the next mutation re-arms the attempt.
//! - `open` is all-or-nothing: on error the session is untouched.

use crate::codec::file::{read_document, write_document, PersistError};
use crate::model::attendance::PeriodStatus;
use crate::model::calendar::Calendar;
use crate::model::roster::Student;
use crate::schedule::clock::{Clock, SystemClock};
use crate::schedule::debounce::{Debouncer, DEFAULT_AUTOSAVE_DELAY_MS};
use crate::service::roster_service::{RosterResult, RosterStore};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// File extension for attendance documents.
pub const DOCUMENT_EXTENSION: &str = "attend";
/// File stem and title used when the document has no major label.
pub const DEFAULT_DOCUMENT_STEM: &str = "Attendance";

/// Asks the presentation layer where to write a document that has no
/// location yet.
pub trait LocationPrompt {
    /// Returns `None` when the user declines.
    fn choose_location(&mut self, suggested_file_name: &str) -> Option<PathBuf>;
}

impl<P: LocationPrompt + ?Sized> LocationPrompt for &mut P {
    fn choose_location(&mut self, suggested_file_name: &str) -> Option<PathBuf> {
        (**self).choose_location(suggested_file_name)
    }
}

/// Prompt that always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl LocationPrompt for NoPrompt {
    fn choose_location(&mut self, _suggested_file_name: &str) -> Option<PathBuf> {
        None
    }
}

/// Prompt that always answers with one path.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub PathBuf);

impl LocationPrompt for FixedLocation {
    fn choose_location(&mut self, _suggested_file_name: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing changed since the last persist to the known location;
    /// nothing was written.
    Clean,
    Saved(PathBuf),
    /// No location was known and the prompt declined.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutosaveOutcome {
    /// No deadline due, or nothing to write.
    Idle,
    Saved(PathBuf),
    /// Deadline passed but no location was chosen.
    NoLocation,
    /// Write failed; the document stays dirty.
    Failed,
}

/// Answer to the unsaved-changes prompt on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Save,
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// Save was requested but no location was chosen; keep the session open.
    Cancelled,
}

/// One open attendance document.
pub struct EditingSession<C: Clock = SystemClock> {
    store: RosterStore,
    location: Option<PathBuf>,
    autosave: Debouncer,
    clock: C,
}

impl EditingSession<SystemClock> {
    /// Creates a session over an empty document using the real clock.
    pub fn new(calendar: Calendar) -> Self {
        Self::with_clock(calendar, SystemClock::new(), DEFAULT_AUTOSAVE_DELAY_MS)
    }
}

impl<C: Clock> EditingSession<C> {
    pub fn with_clock(calendar: Calendar, clock: C, autosave_delay_ms: u64) -> Self {
        Self {
            store: RosterStore::new(calendar),
            location: None,
            autosave: Debouncer::new(autosave_delay_ms),
            clock,
        }
    }

    /// Read access for views. Mutations go through the session.
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Whether destructive actions (open another file, close) must ask the
    /// user first.
    pub fn needs_save_confirmation(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    pub fn add_student(&mut self, name: &str) -> RosterResult<usize> {
        let index = self.store.add_student(name)?;
        self.touch();
        Ok(index)
    }

    pub fn rename_student(&mut self, index: usize, new_name: &str) -> RosterResult<()> {
        self.store.rename_student(index, new_name)?;
        self.touch();
        Ok(())
    }

    pub fn remove_student(&mut self, index: usize) -> RosterResult<Student> {
        let removed = self.store.remove_student(index)?;
        self.touch();
        Ok(removed)
    }

    pub fn set_day_statuses(
        &mut self,
        student: usize,
        week: usize,
        day: usize,
        statuses: Vec<PeriodStatus>,
    ) -> RosterResult<()> {
        self.store.set_day_statuses(student, week, day, statuses)?;
        self.touch();
        Ok(())
    }

    /// Returns `true` when the label changed.
    pub fn set_major(&mut self, label: &str) -> bool {
        let changed = self.store.set_major(label);
        if changed {
            self.touch();
        }
        changed
    }

    /// Loads the document at `path` and adopts it as the save location.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let document = read_document(path, self.store.calendar())?;
        self.store.load_document(document);
        self.location = Some(path.to_path_buf());
        self.autosave.cancel();
        Ok(())
    }

    /// Persists pending changes to the known location, prompting for one
    /// when the document has never been saved.
    ///
    /// A document without a location is always written, even when clean.
    ///
    /// # Errors
    /// - `PersistError` when the write fails; the document stays dirty.
    pub fn save(&mut self, prompt: impl LocationPrompt) -> Result<SaveOutcome, PersistError> {
        if !self.store.is_dirty() && self.location.is_some() {
            return Ok(SaveOutcome::Clean);
        }
        let Some(path) = self.resolve_location(prompt) else {
            info!("event=document_save module=session status=skipped reason=no_location");
            return Ok(SaveOutcome::Cancelled);
        };
        self.persist_to(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Writes to `path` unconditionally and adopts it as the save location.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        self.persist_to(path.as_ref())
    }

    /// Runs the pending autosave once its deadline has passed.
    pub fn tick(&mut self, prompt: impl LocationPrompt) -> AutosaveOutcome {
        if !self.autosave.fire_if_due(self.clock.now_ms()) || !self.store.is_dirty() {
            return AutosaveOutcome::Idle;
        }
        let Some(path) = self.resolve_location(prompt) else {
            info!("event=autosave module=session status=skipped reason=no_location");
            return AutosaveOutcome::NoLocation;
        };
        match self.persist_to(&path) {
            Ok(()) => {
                info!("event=autosave module=session status=ok");
                AutosaveOutcome::Saved(path)
            }
            Err(err) => {
                warn!("event=autosave module=session status=error error={err}");
                AutosaveOutcome::Failed
            }
        }
    }

    /// Tears the session down, honoring the user's unsaved-changes answer.
    ///
    /// On `Err` or `Cancelled` the session stays usable and autosave is
    /// re-armed.
    pub fn close(
        &mut self,
        decision: CloseDecision,
        mut prompt: impl LocationPrompt,
    ) -> Result<CloseOutcome, PersistError> {
        self.autosave.cancel();
        if !self.store.is_dirty() || decision == CloseDecision::Discard {
            info!(
                "event=session_close module=session status=ok discarded={}",
                self.store.is_dirty()
            );
            return Ok(CloseOutcome::Closed);
        }

        match self.save(&mut prompt) {
            Ok(SaveOutcome::Cancelled) => {
                self.touch();
                Ok(CloseOutcome::Cancelled)
            }
            Ok(_) => {
                info!("event=session_close module=session status=ok discarded=false");
                Ok(CloseOutcome::Closed)
            }
            Err(err) => {
                self.touch();
                Err(err)
            }
        }
    }

    /// Window title: `[*]<major> - Attendance`, `*` marking unsaved changes.
    pub fn window_title(&self) -> String {
        let major = self.store.major();
        let title = if major.is_empty() {
            DEFAULT_DOCUMENT_STEM.to_string()
        } else {
            format!("{major} - {DEFAULT_DOCUMENT_STEM}")
        };
        if self.store.is_dirty() {
            format!("*{title}")
        } else {
            title
        }
    }

    /// File name offered when prompting for a first save location.
    pub fn suggested_file_name(&self) -> String {
        let major = self.store.major();
        let stem: String = if major.is_empty() {
            DEFAULT_DOCUMENT_STEM.to_string()
        } else {
            major
                .chars()
                .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
                .collect()
        };
        format!("{stem}.{DOCUMENT_EXTENSION}")
    }

    fn touch(&mut self) {
        self.autosave.schedule(self.clock.now_ms());
    }

    fn resolve_location(&self, mut prompt: impl LocationPrompt) -> Option<PathBuf> {
        match &self.location {
            Some(path) => Some(path.clone()),
            None => prompt.choose_location(&self.suggested_file_name()),
        }
    }

    fn persist_to(&mut self, path: &Path) -> Result<(), PersistError> {
        write_document(path, self.store.document())?;
        self.store.mark_persisted();
        self.autosave.cancel();
        self.location = Some(path.to_path_buf());
        Ok(())
    }
}
