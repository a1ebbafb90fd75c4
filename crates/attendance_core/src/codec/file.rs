//! File-backed document persistence.
//!
//! # Invariants
//! - Writes go to a temporary sibling file that is renamed over the target
//!   only after all bytes are flushed; readers never observe a partial file.
//! - Overwriting an existing file keeps its permissions.
//! - Reads are all-or-nothing: nothing is returned unless the whole payload
//!   decodes.

use crate::codec::document::{deserialize, serialize, FormatError};
use crate::model::calendar::Calendar;
use crate::model::roster::Document;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Failure to read or write a document location.
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure at `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document at `path` is malformed or could not be encoded.
    Format { path: PathBuf, source: FormatError },
}

impl PersistError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => path,
        }
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error at `{}`: {source}", path.display()),
            Self::Format { path, source } => write!(f, "`{}`: {source}", path.display()),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
        }
    }
}

/// Reads and decodes the document at `path`, normalized to `calendar`.
pub fn read_document(path: &Path, calendar: &Calendar) -> Result<Document, PersistError> {
    let started_at = Instant::now();
    let bytes = std::fs::read(path).map_err(|err| {
        error!(
            "event=document_read module=codec status=error error_code=io_failed path={} error={}",
            path.display(),
            err
        );
        PersistError::io(path, err)
    })?;

    let document = deserialize(&bytes, calendar).map_err(|err| {
        error!(
            "event=document_read module=codec status=error error_code=format_invalid path={} error={}",
            path.display(),
            err
        );
        PersistError::Format {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    info!(
        "event=document_read module=codec status=ok path={} students={} duration_ms={}",
        path.display(),
        document.students.len(),
        started_at.elapsed().as_millis()
    );
    Ok(document)
}

/// Encodes `document` and atomically replaces the file at `path`.
pub fn write_document(path: &Path, document: &Document) -> Result<(), PersistError> {
    let started_at = Instant::now();
    let bytes = serialize(document).map_err(|err| PersistError::Format {
        path: path.to_path_buf(),
        source: err,
    })?;

    match write_atomically(path, &bytes) {
        Ok(()) => {
            info!(
                "event=document_write module=codec status=ok path={} bytes={} duration_ms={}",
                path.display(),
                bytes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=document_write module=codec status=error error_code=io_failed path={} error={}",
                path.display(),
                err
            );
            Err(PersistError::io(path, err))
        }
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(parent)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    match std::fs::metadata(path) {
        Ok(existing) => staged.as_file().set_permissions(existing.permissions())?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_document, write_document, PersistError};
    use crate::model::calendar::Calendar;
    use crate::model::roster::Document;

    #[test]
    fn write_into_missing_directory_fails_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("class.attend");
        let document = Document::empty(&Calendar::default());

        let err = write_document(&target, &document).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
        assert_eq!(err.path(), target.as_path());
        assert!(!target.exists());
    }

    #[test]
    fn read_reports_format_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("broken.attend");
        std::fs::write(&target, b"[1, 2, 3]").unwrap();

        let err = read_document(&target, &Calendar::default()).unwrap_err();
        assert!(matches!(err, PersistError::Format { .. }));
        assert!(err.to_string().contains("broken.attend"));
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("shared.attend");
        std::fs::write(&target, b"{}").unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_document(&target, &Document::empty(&Calendar::default())).unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert!(read_document(&target, &Calendar::default()).is_ok());
    }
}
