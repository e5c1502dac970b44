use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Result of a successful atomic write.
#[derive(Debug)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: u64,
    /// Set when the file is in place but syncing the final handle failed.
    pub close_error: Option<io::Error>,
}

/// Atomically writes a whole file by writing a sibling temp file then renaming.
///
/// Until the rename happens the target is untouched, so a failed run never
/// leaves a truncated file behind.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Writes `content` into a temp file beside the target without touching it.
    pub fn stage(&self, content: &str) -> Result<StagedFile, PersistError> {
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_output_dir(&dir)?;
        if self.target.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is a directory",
                self.target.display()
            )));
        }

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;

        Ok(StagedFile {
            tmp,
            target: self.target.clone(),
            bytes: content.len() as u64,
        })
    }

    pub fn write(&self, content: &str) -> Result<Written, PersistError> {
        self.stage(content)?.commit()
    }
}

/// Fully written temp file waiting to replace its target.
///
/// Dropping it without `commit` deletes the temp file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    target: PathBuf,
    bytes: u64,
}

impl StagedFile {
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Renames the temp file over the target, then syncs it.
    pub fn commit(self) -> Result<Written, PersistError> {
        let file = self
            .tmp
            .persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        let close_error = file.sync_all().err();

        Ok(Written {
            path: self.target,
            bytes: self.bytes,
            close_error,
        })
    }
}
