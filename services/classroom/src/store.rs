//! Progress Persistence
//!
//! Teaching progress (coins, experience, title) lives in a small JSON file.
//! Nothing else about a session is persisted.

use classroom_core::rewards::Progress;
use std::{io, path::PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access progress file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Progress file {path} is not valid: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A file-backed store for the user's teaching progress.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads saved progress; a missing file means a fresh start.
    pub async fn load(&self) -> Result<Progress, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No progress file yet, starting fresh");
                return Ok(Progress::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes progress, creating parent directories as needed.
    pub async fn save(&self, progress: &Progress) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(progress).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json)
            .await
            .map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), coins = progress.total_coins, "Progress saved");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
