//! SQLite EventRepository implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use stats_domain::{DatabaseBackend, EventId, EventRepository, NewGameEvent, SchemaOutcome};

use crate::schema::{
    insert_event_sql, ledger_lookup_sql, ledger_record_sql, ledger_table_sql, schema_statements,
};

const BACKEND: DatabaseBackend = DatabaseBackend::Sqlite;

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn ensure_schema(&self) -> Result<SchemaOutcome> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin schema transaction")?;

        sqlx::query(&ledger_table_sql(BACKEND))
            .execute(&mut *tx)
            .await
            .context("failed to create schema_migrations")?;
        let recorded = sqlx::query(&ledger_lookup_sql(BACKEND))
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if recorded {
            tx.commit().await?;
            return Ok(SchemaOutcome::AlreadyApplied);
        }

        for statement in schema_statements(BACKEND) {
            debug!(statement = statement.label, "applying schema statement");
            sqlx::query(&statement.sql)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("schema statement {} failed", statement.label))?;
        }
        sqlx::query(&ledger_record_sql(BACKEND))
            .execute(&mut *tx)
            .await
            .context("failed to record schema version")?;
        tx.commit().await.context("failed to commit schema")?;
        Ok(SchemaOutcome::Applied)
    }

    async fn insert_event(&self, event: &NewGameEvent) -> Result<EventId> {
        let row = sqlx::query(&insert_event_sql(BACKEND, event))
            .fetch_one(&self.pool)
            .await
            .context("failed to insert game event")?;
        let id: i64 = row.try_get("id")?;
        Ok(EventId(id))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
