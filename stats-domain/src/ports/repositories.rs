use async_trait::async_trait;

use crate::entities::{NewGameEvent, SchemaOutcome};
use crate::value_objects::EventId;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Create tables, indexes and comments unless the schema version is
    /// already recorded.
    async fn ensure_schema(&self) -> anyhow::Result<SchemaOutcome>;
    async fn insert_event(&self, event: &NewGameEvent) -> anyhow::Result<EventId>;
    async fn ping(&self) -> anyhow::Result<()>;
    async fn close(&self);
}
