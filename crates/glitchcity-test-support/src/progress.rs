//! Test progress stores: mock `ProgressStore` implementations for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use glitchcity_core::error::DomainError;
use glitchcity_core::progress::ProgressStore;

/// An in-memory progress store that counts how often the flag was written.
#[derive(Debug, Default)]
pub struct RecordingProgressStore {
    completed: AtomicBool,
    writes: AtomicUsize,
}

impl RecordingProgressStore {
    /// Create a store whose flag starts at `completed`.
    #[must_use]
    pub fn new(completed: bool) -> Self {
        Self {
            completed: AtomicBool::new(completed),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `mark_tutorial_completed` calls received.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current value of the flag.
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProgressStore for RecordingProgressStore {
    async fn tutorial_completed(&self) -> Result<bool, DomainError> {
        Ok(self.completed.load(Ordering::SeqCst))
    }

    async fn mark_tutorial_completed(&self) -> Result<(), DomainError> {
        self.completed.store(true, Ordering::SeqCst);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A progress store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingProgressStore;

#[async_trait]
impl ProgressStore for FailingProgressStore {
    async fn tutorial_completed(&self) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }

    async fn mark_tutorial_completed(&self) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }
}
