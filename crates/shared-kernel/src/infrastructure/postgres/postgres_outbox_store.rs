// crates/shared-kernel/src/infrastructure/postgres/postgres_outbox_store.rs

use crate::domain::repositories::{OutboxStore, PendingEvent};
use crate::errors::Result;
use crate::infrastructure::postgres::{OutboxRow, SqlxErrorExt};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresOutboxStore {
    pool: PgPool,
}

impl PostgresOutboxStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutboxStore for PostgresOutboxStore {
    /// Sélectionne la TÊTE de file de chaque agrégat (sa plus ancienne ligne
    /// non publiée), puis filtre sur l'éligibilité. Une ligne en backoff ou
    /// dead-letter masque donc mécaniquement les suivantes du même agrégat :
    /// deux workers concurrents ne peuvent pas publier un agrégat dans le
    /// désordre, au pire ils re-publient la même tête (toléré, consommateurs
    /// idempotents).
    async fn fetch_publishable(&self, limit: u32) -> Result<Vec<PendingEvent>> {
        let sql = r#"
            WITH heads AS (
                SELECT DISTINCT ON (aggregate_id) id
                FROM outbox_events
                WHERE published_at IS NULL
                ORDER BY aggregate_id, created_at ASC, id ASC
            )
            SELECT
                o.id, o.aggregate_type, o.aggregate_id, o.event_type,
                o.payload, o.metadata, o.occurred_at, o.retry_count
            FROM outbox_events o
            JOIN heads h ON h.id = o.id
            WHERE o.dead_lettered = FALSE
              AND o.next_attempt_at <= NOW()
              AND NOT EXISTS (
                  SELECT 1 FROM outbox_events d
                  WHERE d.aggregate_id = o.aggregate_id AND d.dead_lettered
              )
            ORDER BY o.created_at ASC, o.id ASC
            LIMIT $1
            FOR UPDATE OF o SKIP LOCKED
        "#;

        let rows = sqlx::query_as::<_, OutboxRow>(sql)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("Failed to fetch publishable outbox events")?;

        Ok(rows.into_iter().map(PendingEvent::from).collect())
    }

    async fn mark_as_published(&self, ids: &[Uuid]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        // Garde `published_at IS NULL` : le double marquage d'un worker
        // concurrent est un no-op, jamais une corruption.
        sqlx::query(
            "UPDATE outbox_events SET published_at = NOW() WHERE id = ANY($1) AND published_at IS NULL",
        )
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_domain_infra("Failed to mark outbox events as published")?;

        Ok(())
    }

    async fn mark_as_failed(
        &self,
        id: Uuid,
        last_error: String,
        next_attempt_at: DateTime<Utc>,
        dead_letter: bool,
    ) -> Result<()> {
        let sql = r#"
            UPDATE outbox_events
            SET retry_count = retry_count + 1,
                last_error = $2,
                next_attempt_at = $3,
                dead_lettered = $4
            WHERE id = $1 AND published_at IS NULL
        "#;

        sqlx::query(sql)
            .bind(id)
            .bind(last_error)
            .bind(next_attempt_at)
            .bind(dead_letter)
            .execute(&self.pool)
            .await
            .map_domain_infra("Failed to record outbox publish failure")?;

        Ok(())
    }
}
