//! JSON-file implementation of the `ProgressStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use glitchcity_core::clock::Clock;
use glitchcity_core::error::DomainError;
use glitchcity_core::progress::ProgressStore;

/// On-disk record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressRecord {
    tutorial_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

/// Progress store backed by a small JSON document. A missing file reads as
/// "never completed".
#[derive(Clone)]
pub struct FileProgressStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileProgressStore {
    /// Creates a store that reads and writes `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_record(&self) -> Result<ProgressRecord, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ProgressRecord::default()),
            Err(e) => {
                return Err(DomainError::Infrastructure(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Infrastructure(format!("corrupt progress file {}: {e}", self.path.display()))
        })
    }
}

impl std::fmt::Debug for FileProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileProgressStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProgressStore for FileProgressStore {
    async fn tutorial_completed(&self) -> Result<bool, DomainError> {
        Ok(self.read_record().await?.tutorial_completed)
    }

    async fn mark_tutorial_completed(&self) -> Result<(), DomainError> {
        let record = ProgressRecord {
            tutorial_completed: true,
            completed_at: Some(self.clock.now()),
        };
        let bytes = serde_json::to_vec_pretty(&record)
            .map_err(|e| DomainError::Infrastructure(format!("progress serialization failed: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::Infrastructure(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            DomainError::Infrastructure(format!("failed to write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "tutorial completion recorded");
        Ok(())
    }
}
