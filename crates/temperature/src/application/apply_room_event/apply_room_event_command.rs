// crates/temperature/src/application/apply_room_event/apply_room_event_command.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ApplyRoomEventCommand {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub change: RoomChange,
}

#[derive(Debug, Clone)]
pub enum RoomChange {
    Created {
        room_id: i64,
        house_id: i64,
        name: String,
    },
    Updated {
        room_id: i64,
        house_id: i64,
        name: String,
    },
    Deleted {
        room_id: i64,
        house_id: i64,
    },
}
