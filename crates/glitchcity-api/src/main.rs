//! Glitch City API server entry point.

use std::sync::{Arc, Mutex};

use glitchcity_api::config::AppConfig;
use glitchcity_api::error::AppError;
use glitchcity_api::narrative_client::{DisconnectedNarrativeService, HttpNarrativeService};
use glitchcity_api::state::AppState;
use glitchcity_core::clock::{Clock, SystemClock};
use glitchcity_core::narrative::NarrativeService;
use glitchcity_core::progress::ProgressStore;
use glitchcity_core::rng::{DeterministicRng, StdRngSource};
use glitchcity_engine::application::command_handlers::bootstrap_session;
use glitchcity_progress_store::file_progress_store::FileProgressStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Glitch City API server");

    let config = AppConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let source = match config.game_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded RNG");
            StdRngSource::seeded(seed)
        }
        None => StdRngSource::from_entropy(),
    };
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(source));

    let narrative: Arc<dyn NarrativeService> = match &config.narrative_service_url {
        Some(url) => Arc::new(HttpNarrativeService::new(url.clone(), config.narrative_timeout)?),
        None => {
            tracing::warn!("NARRATIVE_SERVICE_URL not set; every turn will use the fallback outcome");
            Arc::new(DisconnectedNarrativeService)
        }
    };
    let progress: Arc<dyn ProgressStore> =
        Arc::new(FileProgressStore::new(config.progress_file.clone(), Arc::clone(&clock)));

    let initial = bootstrap_session(progress.as_ref()).await;
    tracing::info!(tutorial = initial.is_tutorial_active, "session bootstrapped");

    let app_state = AppState::new(
        clock,
        rng,
        narrative,
        progress,
        initial,
        config.recovery_cooldown,
    );
    let app = glitchcity_api::app(app_state);

    let addr = config.bind_address()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
