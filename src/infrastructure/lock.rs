//! Advisory lock on the build directory

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{StackpilotError, StackpilotResult};

/// Held for the duration of a build; released on drop.
#[derive(Debug)]
pub struct BuildLock {
    file: File,
    path: PathBuf,
}

impl BuildLock {
    /// Take the lock without waiting; another holder is `Locked`.
    pub fn acquire(path: &Path) -> StackpilotResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        if file.try_lock_exclusive().is_err() {
            return Err(StackpilotError::Locked {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), "build lock acquired");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release build lock");
        }
    }
}
