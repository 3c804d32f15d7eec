use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use stats_domain::{EventId, EventRepository, NewGameEvent, RuntimeConfig, SchemaOutcome};

use crate::AppState;

/// EventRepository that keeps events in memory and can be told to fail.
#[derive(Default)]
pub struct MemoryEventRepository {
    pub events: Mutex<Vec<NewGameEvent>>,
    pub schema_applied: AtomicBool,
    pub fail_schema: bool,
    pub fail_inserts: bool,
    /// Inserts never complete, like a pool waiting on a dead database.
    pub hang_inserts: bool,
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn ensure_schema(&self) -> Result<SchemaOutcome> {
        if self.fail_schema {
            return Err(anyhow!("permission denied for schema public"));
        }
        if self.schema_applied.swap(true, Ordering::SeqCst) {
            Ok(SchemaOutcome::AlreadyApplied)
        } else {
            Ok(SchemaOutcome::Applied)
        }
    }

    async fn insert_event(&self, event: &NewGameEvent) -> Result<EventId> {
        if self.hang_inserts {
            std::future::pending::<()>().await;
        }
        if self.fail_inserts {
            return Err(anyhow!("relation \"game_events\" does not exist"));
        }
        let mut events = self.events.lock().map_err(|_| anyhow!("poisoned"))?;
        events.push(event.clone());
        Ok(EventId(events.len() as i64))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}

pub fn state_with(repo: Arc<MemoryEventRepository>) -> AppState {
    let config = RuntimeConfig {
        event_interval_millis: 1,
        player_pool_size: 5,
        stats_every_events: 10,
    };
    AppState::new(config, repo)
}
