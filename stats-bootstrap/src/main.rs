use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use stats_bootstrap::{run_generate, run_migrate, GenerateRequest};
use stats_infrastructure::{AppConfig, ConfigSource, CONFIG_PATH_ENV};

#[derive(Parser, Debug)]
#[command(name = "game-stats")]
#[command(about = "Game telemetry schema and event generator", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the game_events and player_stats schema
    Migrate,
    /// Stream simulated gameplay events into game_events
    Generate {
        /// Stop after this many stored events
        #[arg(long)]
        count: Option<u64>,
        /// Delay between events in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Size of the simulated player pool
        #[arg(long)]
        players: Option<usize>,
        /// Do not apply the schema before generating
        #[arg(long)]
        skip_migrate: bool,
    },
}

fn init_tracing(log_dir: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log dir {}", dir))?;
            let appender = tracing_appender::rolling::daily(dir, "game-stats.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = &args.config {
        std::env::set_var(CONFIG_PATH_ENV, config);
    }

    // Read before the subscriber exists since log_dir lives in the config;
    // the missing-file warning is logged once tracing is up.
    let config_path = AppConfig::config_path();
    let (config, source) = AppConfig::read_from(&config_path).await?;
    let _log_guard = init_tracing(config.log_dir.as_deref())?;
    if source == ConfigSource::Defaults {
        warn!(path = %config_path.display(), "config file not found, using defaults");
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        "game-stats starting"
    );

    match args.command {
        Command::Migrate => run_migrate(config).await,
        Command::Generate {
            count,
            interval_ms,
            players,
            skip_migrate,
        } => {
            run_generate(
                config,
                GenerateRequest {
                    max_events: count,
                    interval_ms,
                    players,
                    skip_migrate,
                },
            )
            .await
        }
    }
}
