// crates/house/src/infrastructure/postgres/rows/postgres_room_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::Room;
use crate::domain::value_objects::{HouseId, RoomId, RoomName};

#[derive(FromRow)]
pub struct RoomRow {
    id: i64,
    house_id: i64,
    name: String,
    version: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room::hydrate(
            RoomId::new(row.id),
            HouseId::new(row.house_id),
            RoomName::from_raw(row.name),
            row.created_at,
            row.updated_at,
            row.version,
        )
    }
}
