//! Durable storage for player onboarding progress.

pub mod file_progress_store;
