// crates/shared-kernel/src/infrastructure/postgres/postgres_outbox_repository.rs

use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use crate::infrastructure::postgres::{SqlxErrorExt, TransactionExt};
use async_trait::async_trait;
use sqlx::query;

pub struct PostgresOutboxRepository;

impl PostgresOutboxRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostgresOutboxRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutboxRepository for PostgresOutboxRepository {
    /// Append dans la transaction du domaine : la ligne outbox commite
    /// avec la mutation ou pas du tout.
    async fn save(&self, tx: &mut dyn Transaction, event: &dyn DomainEvent) -> Result<()> {
        let sqlx_tx = tx.downcast_mut_sqlx()?;
        let envelope = EventEnvelope::wrap(event);

        query(
            r#"
            INSERT INTO outbox_events (id, aggregate_type, aggregate_id, event_type, payload, metadata, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#
        )
            .bind(envelope.id)
            .bind(envelope.aggregate_type)
            .bind(envelope.aggregate_id)
            .bind(envelope.event_type)
            .bind(envelope.payload)
            .bind(envelope.metadata)
            .bind(envelope.occurred_at)
            .execute(&mut **sqlx_tx)
            .await
            .map_domain_infra("Outbox append failed")?;

        Ok(())
    }
}
