// crates/temperature/src/infrastructure/postgres/rows/postgres_room_replica_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::replica::RoomReplica;

#[derive(FromRow)]
pub struct RoomReplicaRow {
    room_id: i64,
    house_id: i64,
    name: String,
    last_event_id: Uuid,
    last_synced_at: DateTime<Utc>,
}

impl From<RoomReplicaRow> for RoomReplica {
    fn from(row: RoomReplicaRow) -> Self {
        Self {
            room_id: row.room_id,
            house_id: row.house_id,
            name: row.name,
            last_event_id: row.last_event_id,
            last_synced_at: row.last_synced_at,
        }
    }
}
