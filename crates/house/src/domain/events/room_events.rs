// crates/house/src/domain/events/room_events.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_kernel::domain::events::DomainEvent;
use std::borrow::Cow;
use uuid::Uuid;

use crate::domain::entities::Room;
use crate::domain::value_objects::{HouseId, RoomId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RoomEvent {
    RoomCreated {
        id: Uuid,
        room_id: RoomId,
        house_id: HouseId,
        name: String,
        occurred_at: DateTime<Utc>,
    },

    RoomUpdated {
        id: Uuid,
        room_id: RoomId,
        house_id: HouseId,
        name: String,
        occurred_at: DateTime<Utc>,
    },

    RoomDeleted {
        id: Uuid,
        room_id: RoomId,
        house_id: HouseId,
        occurred_at: DateTime<Utc>,
    },
}

impl RoomEvent {
    pub fn created(room: &Room) -> Self {
        Self::RoomCreated {
            id: Uuid::now_v7(),
            room_id: room.id,
            house_id: room.house_id,
            name: room.name.as_str().to_string(),
            occurred_at: room.created_at,
        }
    }

    pub fn updated(room: &Room) -> Self {
        Self::RoomUpdated {
            id: Uuid::now_v7(),
            room_id: room.id,
            house_id: room.house_id,
            name: room.name.as_str().to_string(),
            occurred_at: room.updated_at,
        }
    }

    pub fn deleted(room_id: RoomId, house_id: HouseId) -> Self {
        Self::RoomDeleted {
            id: Uuid::now_v7(),
            room_id,
            house_id,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for RoomEvent {
    fn event_id(&self) -> Uuid {
        match self {
            Self::RoomCreated { id, .. }
            | Self::RoomUpdated { id, .. }
            | Self::RoomDeleted { id, .. } => *id,
        }
    }

    fn event_type(&self) -> Cow<'_, str> {
        match self {
            Self::RoomCreated { .. } => Cow::Borrowed("room.created"),
            Self::RoomUpdated { .. } => Cow::Borrowed("room.updated"),
            Self::RoomDeleted { .. } => Cow::Borrowed("room.deleted"),
        }
    }

    fn aggregate_type(&self) -> Cow<'_, str> {
        Cow::Borrowed("room")
    }

    fn aggregate_id(&self) -> String {
        match self {
            Self::RoomCreated { room_id, .. }
            | Self::RoomUpdated { room_id, .. }
            | Self::RoomDeleted { room_id, .. } => room_id.to_string(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::RoomCreated { occurred_at, .. }
            | Self::RoomUpdated { occurred_at, .. }
            | Self::RoomDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn payload(&self) -> Value {
        json!(self)
    }
}
