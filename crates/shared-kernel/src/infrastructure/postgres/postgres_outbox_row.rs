// crates/shared-kernel/src/infrastructure/postgres/postgres_outbox_row.rs

use crate::domain::events::EventEnvelope;
use crate::domain::repositories::PendingEvent;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Struct privé à l'infrastructure pour le mapping SQLx
#[derive(FromRow)]
pub struct OutboxRow {
    id: Uuid,
    aggregate_type: String,
    aggregate_id: String,
    event_type: String,
    payload: Value,
    metadata: Option<Value>,
    occurred_at: DateTime<Utc>,
    retry_count: i32,
}

impl From<OutboxRow> for PendingEvent {
    fn from(row: OutboxRow) -> Self {
        Self {
            envelope: EventEnvelope {
                id: row.id,
                aggregate_type: row.aggregate_type,
                aggregate_id: row.aggregate_id,
                event_type: row.event_type,
                payload: row.payload,
                occurred_at: row.occurred_at,
                metadata: row.metadata,
            },
            retry_count: row.retry_count,
        }
    }
}
