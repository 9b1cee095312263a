//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;
use glitchcity_engine::domain::session::DEFAULT_RECOVERY_COOLDOWN_MS;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROGRESS_FILE: &str = "glitchcity-progress.json";
const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 30;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Narrative relay endpoint. `None` disables the relay.
    pub narrative_service_url: Option<String>,
    pub narrative_timeout: Duration,
    pub progress_file: PathBuf,
    /// Fixed RNG seed for reproducible sessions.
    pub game_seed: Option<u64>,
    /// How long the session must stay critical before recovery is offered.
    pub recovery_cooldown: TimeDelta,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let recovery_cooldown_ms: u32 = parse_or(
            non_empty("RECOVERY_COOLDOWN_MS"),
            "RECOVERY_COOLDOWN_MS",
            DEFAULT_RECOVERY_COOLDOWN_MS,
        )?;
        let narrative_timeout_secs = parse_or(
            non_empty("NARRATIVE_TIMEOUT_SECS"),
            "NARRATIVE_TIMEOUT_SECS",
            DEFAULT_NARRATIVE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or(non_empty("PORT"), "PORT", DEFAULT_PORT)?,
            narrative_service_url: non_empty("NARRATIVE_SERVICE_URL"),
            narrative_timeout: Duration::from_secs(narrative_timeout_secs),
            progress_file: non_empty("PROGRESS_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_PROGRESS_FILE), PathBuf::from),
            game_seed: non_empty("GAME_SEED")
                .map(|raw| parse("GAME_SEED", &raw))
                .transpose()?,
            recovery_cooldown: TimeDelta::milliseconds(i64::from(recovery_cooldown_ms)),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// address.
    pub fn bind_address(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{key} is invalid: {e}")))
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |raw| parse(key, &raw))
}
