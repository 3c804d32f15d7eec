use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use backon::{ConstantBuilder, Retryable};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use stats_domain::{DatabaseBackend, DbConfig, EventRepository};

use crate::repositories::{PostgresEventRepository, SqliteEventRepository};

/// Open a pool for the configured backend, retrying with a constant delay
/// until `connect_max_retries` attempts have failed.
pub async fn connect_repository(config: &DbConfig) -> Result<Arc<dyn EventRepository>> {
    info!(
        backend = config.backend.as_str(),
        url = %config.redacted_url(),
        max_attempts = config.connect_max_retries,
        "connecting to database"
    );
    let repo: Arc<dyn EventRepository> = match config.backend {
        DatabaseBackend::Postgres => {
            let pool = with_retry(config, || {
                PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.url)
            })
            .await?;
            Arc::new(PostgresEventRepository::new(pool))
        }
        DatabaseBackend::Sqlite => {
            let options = SqliteConnectOptions::from_str(&config.url)
                .with_context(|| format!("invalid sqlite url {}", config.redacted_url()))?
                .create_if_missing(true);
            // every in-memory connection is its own database
            let max_connections = if config.url.contains(":memory:") {
                1
            } else {
                config.max_connections
            };
            let pool = with_retry(config, || {
                SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .connect_with(options.clone())
            })
            .await?;
            Arc::new(SqliteEventRepository::new(pool))
        }
    };
    info!(backend = config.backend.as_str(), "database connection established");
    Ok(repo)
}

async fn with_retry<T, F, Fut>(config: &DbConfig, connect: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = std::result::Result<T, sqlx::Error>>,
{
    let max_attempts = config.connect_max_retries.max(1);
    let backoff = ConstantBuilder::default()
        .with_delay(Duration::from_secs(config.connect_retry_delay_seconds))
        .with_max_times(max_attempts as usize - 1);

    let mut attempt = 0u32;
    connect
        .retry(backoff)
        .sleep(tokio::time::sleep)
        .notify(|err: &sqlx::Error, delay: Duration| {
            attempt += 1;
            warn!(
                attempt,
                max_attempts,
                retry_in_secs = delay.as_secs(),
                error = %err,
                "database connection attempt failed"
            );
        })
        .await
        .with_context(|| {
            format!(
                "could not connect to {} after {} attempts",
                config.redacted_url(),
                max_attempts
            )
        })
}
