// crates/temperature/src/infrastructure/postgres/rows/postgres_house_replica_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::replica::HouseReplica;

#[derive(FromRow)]
pub struct HouseReplicaRow {
    house_id: i64,
    name: String,
    address: Option<String>,
    last_event_id: Uuid,
    last_synced_at: DateTime<Utc>,
}

impl From<HouseReplicaRow> for HouseReplica {
    fn from(row: HouseReplicaRow) -> Self {
        Self {
            house_id: row.house_id,
            name: row.name,
            address: row.address,
            last_event_id: row.last_event_id,
            last_synced_at: row.last_synced_at,
        }
    }
}
