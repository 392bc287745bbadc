//! Tally persistence.
//!
//! The tally lives in one small JSON file. A cycle holds an exclusive lock on
//! a sibling `.lock` file from load to save, so two board processes sharing a
//! tally never interleave their read-modify-write.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chores_common::Tally;

use crate::error::StoreError;

/// Where the tally survives between cycles.
pub trait TallyStore {
    /// Take the exclusive lock held for one load/modify/save sequence.
    fn lock(&self) -> Result<StoreLock, StoreError>;

    /// Last saved tally, or the zero tally if there is none or it is unreadable.
    fn load(&self) -> Tally;

    /// Replace the stored tally.
    fn save(
        &self,
        tally: &Tally,
    ) -> Result<(), StoreError>;
}

/// Exclusive access to a store. Released on drop.
#[derive(Debug)]
pub struct StoreLock {
    _file: Option<File>,
}

impl StoreLock {
    /// Lock for stores with nothing to lock.
    pub const fn unlocked() -> Self { Self { _file: None } }
}

/// [`TallyStore`] backed by a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    fn sibling(
        &self,
        suffix: &str,
    ) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl TallyStore for JsonFileStore {
    fn lock(&self) -> Result<StoreLock, StoreError> {
        let path = self.sibling(".lock");
        let err = |source| StoreError::Lock {
            path: path.clone(),
            source,
        };
        self.ensure_parent().map_err(err)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(err)?;
        file.lock().map_err(err)?;
        tracing::trace!(path = %path.display(), "tally locked");
        Ok(StoreLock { _file: Some(file) })
    }

    fn load(&self) -> Tally {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no tally yet, starting from zero");
                return Tally::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "tally unreadable, starting from zero");
                return Tally::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "tally corrupt, starting from zero");
            Tally::default()
        })
    }

    fn save(
        &self,
        tally: &Tally,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(tally)?;
        let tmp = self.sibling(".tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        self.ensure_parent().map_err(write_err)?;
        let replaced = File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(&json)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = replaced {
            // The temp file may not exist yet.
            fs::remove_file(&tmp).ok();
            return Err(write_err(e));
        }
        tracing::debug!(path = %self.path.display(), tasks_completed = tally.tasks_completed, "tally saved");
        Ok(())
    }
}
