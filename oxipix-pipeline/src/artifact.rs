//! Scoped on-disk artifacts.
//!
//! Stage outputs that are materialized as files are owned by a guard
//! that removes the file when it goes out of scope. A guard that is not
//! explicitly disarmed deletes its file on both the success and the
//! failure path, which is what keeps aborted operations from leaving
//! partial outputs behind.

use oxipix_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A file that is deleted when the guard is dropped.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    armed: bool,
}

impl TempArtifact {
    /// Write `bytes` to `path` and take ownership of the file.
    pub fn write(path: PathBuf, bytes: &[u8]) -> Result<Self> {
        fs::write(&path, bytes)?;
        Ok(Self { path, armed: true })
    }

    /// The artifact's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Disarm the guard, leaving the file in place.
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        self.path.clone()
    }

    /// Rename the file into its final place and disarm the guard.
    pub fn persist(mut self, target: &Path) -> Result<PathBuf> {
        fs::rename(&self.path, target)?;
        self.armed = false;
        Ok(target.to_path_buf())
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
