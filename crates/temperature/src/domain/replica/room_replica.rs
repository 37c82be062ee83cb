// crates/temperature/src/domain/replica/room_replica.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Copie locale d'une pièce. `house_id` est une simple clé de référence :
/// "les pièces d'une maison" est une requête (jointure), jamais un pointeur
/// inverse stocké côté maison.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomReplica {
    pub room_id: i64,
    pub house_id: i64,
    pub name: String,
    pub last_event_id: Uuid,
    pub last_synced_at: DateTime<Utc>,
}

impl RoomReplica {
    pub fn from_event(room_id: i64, house_id: i64, name: String, event_id: Uuid) -> Self {
        Self {
            room_id,
            house_id,
            name,
            last_event_id: event_id,
            last_synced_at: Utc::now(),
        }
    }
}
