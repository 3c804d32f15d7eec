use tracing::{error, info};

use crate::{AppError, AppState};
use stats_domain::{SchemaOutcome, GAME_EVENTS_INDEXES, SCHEMA_NAME, SCHEMA_VERSION};

/// Bring the database up to the game stats schema and report what happened.
pub async fn apply_schema(state: &AppState) -> Result<SchemaOutcome, AppError> {
    let outcome = state.event_repo.ensure_schema().await.map_err(|err| {
        error!("failed to apply schema: {:#}", err);
        AppError::Internal(err)
    })?;

    match outcome {
        SchemaOutcome::Applied => {
            info!(table = "game_events", "game_events table ready");
            info!(table = "player_stats", "player_stats table ready");
            info!(count = GAME_EVENTS_INDEXES.len(), "game_events indexes ready");
            info!(
                version = SCHEMA_VERSION,
                name = SCHEMA_NAME,
                "schema applied"
            );
        }
        SchemaOutcome::AlreadyApplied => {
            info!(
                version = SCHEMA_VERSION,
                name = SCHEMA_NAME,
                "schema already applied"
            );
        }
    }
    Ok(outcome)
}
