use anyhow::Result;
use tracing::{info, warn};

use stats_application::commands::{apply_schema, run_generator, GenerateOptions};
use stats_domain::EventGenerator;
use stats_infrastructure::AppConfig;

use crate::context::AppContext;

/// Command line overrides for a generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub max_events: Option<u64>,
    pub interval_ms: Option<u64>,
    pub players: Option<usize>,
    pub skip_migrate: bool,
}

pub async fn run_migrate(config: AppConfig) -> Result<()> {
    let context = AppContext::new(&config).await?;
    let result = apply_schema(&context.state).await;
    context.shutdown().await;
    result?;
    Ok(())
}

pub async fn run_generate(mut config: AppConfig, request: GenerateRequest) -> Result<()> {
    if let Some(players) = request.players {
        config.player_pool_size = players;
    }
    if let Some(interval_ms) = request.interval_ms {
        config.event_interval_millis = interval_ms;
    }
    config.validate()?;

    let context = AppContext::new(&config).await?;
    let state = context.state.clone();
    if request.skip_migrate {
        info!("skipping schema migration");
    } else if let Err(err) = apply_schema(&state).await {
        context.shutdown().await;
        return Err(err.into());
    }

    let mut generator = EventGenerator::new(state.config.player_pool_size)?;
    let options = GenerateOptions {
        max_events: request.max_events,
        ..GenerateOptions::from_state(&state)
    };
    let result = run_generator(&state, &mut generator, options, shutdown_signal()).await;
    context.shutdown().await;

    let summary = result?;
    let metrics = state.metrics.snapshot();
    info!(
        stored = summary.events,
        generated = metrics.events_generated,
        insert_errors = metrics.insert_errors,
        elapsed_secs = %format!("{:.1}", summary.elapsed.as_secs_f64()),
        "generator finished"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
