//! Temporary replacement of function dependency manifests
//!
//! Function dependencies ship in the layers, so the function build must see
//! empty manifests. [`ManifestSwap`] moves each manifest aside, writes an
//! empty stub in its place and puts the original back on [`ManifestSwap::restore`]
//! or, failing that, on drop (early return, panic, build tool interrupted).

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StackpilotResult;

/// Appended to a manifest's file name for its backup
pub const BACKUP_SUFFIX: &str = ".stackpilot.bak";

#[derive(Debug)]
struct Swapped {
    original: PathBuf,
    backup: PathBuf,
}

/// Scope guard owning the swapped manifests
#[derive(Debug)]
pub struct ManifestSwap {
    swapped: Vec<Swapped>,
}

impl ManifestSwap {
    /// Swap every existing manifest for an empty stub.
    ///
    /// Missing manifests are skipped. A backup left behind by an earlier
    /// run that was killed is restored first.
    pub fn swap(manifests: &[PathBuf]) -> StackpilotResult<Self> {
        let mut guard = Self {
            swapped: Vec::with_capacity(manifests.len()),
        };

        for original in manifests {
            let backup = backup_path(original);
            if backup.exists() {
                tracing::warn!(
                    manifest = %original.display(),
                    "found stale manifest backup, restoring it first"
                );
                fs::rename(&backup, original)?;
            }
            if !original.exists() {
                tracing::debug!(manifest = %original.display(), "manifest not found, skipping");
                continue;
            }

            fs::rename(original, &backup)?;
            guard.swapped.push(Swapped {
                original: original.clone(),
                backup,
            });
            fs::write(original, "")?;
        }

        Ok(guard)
    }

    pub fn len(&self) -> usize {
        self.swapped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swapped.is_empty()
    }

    /// Put every original back, reporting the first failure.
    pub fn restore(mut self) -> StackpilotResult<usize> {
        let count = self.swapped.len();
        match self.restore_all().into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(count),
        }
    }

    fn restore_all(&mut self) -> Vec<std::io::Error> {
        let mut errors = Vec::new();
        for entry in self.swapped.drain(..).rev() {
            if let Err(err) = fs::rename(&entry.backup, &entry.original) {
                tracing::error!(
                    manifest = %entry.original.display(),
                    backup = %entry.backup.display(),
                    error = %err,
                    "failed to restore manifest"
                );
                errors.push(err);
            }
        }
        errors
    }
}

impl Drop for ManifestSwap {
    fn drop(&mut self) {
        if !self.swapped.is_empty() {
            tracing::debug!(count = self.swapped.len(), "restoring manifests on drop");
            self.restore_all();
        }
    }
}

fn backup_path(original: &Path) -> PathBuf {
    let mut name: OsString = original
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    original.with_file_name(name)
}
