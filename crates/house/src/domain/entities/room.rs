// crates/house/src/domain/entities/room.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::events::{AggregateMetadata, AggregateRoot};

use crate::domain::events::RoomEvent;
use crate::domain::value_objects::{HouseId, RoomId, RoomName};

/// Pièce d'une maison. La relation est portée par `house_id` uniquement :
/// la maison ne garde pas de liste de pièces, "les pièces d'une maison"
/// est une requête, pas un pointeur inverse.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub house_id: HouseId,
    pub name: RoomName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: AggregateMetadata,
}

impl Room {
    pub fn hydrate(
        id: RoomId,
        house_id: HouseId,
        name: RoomName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i32,
    ) -> Self {
        Self {
            id,
            house_id,
            name,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    pub fn rename(&mut self, new_name: RoomName) -> bool {
        if self.name == new_name {
            return false;
        }

        self.name = new_name;
        self.updated_at = Utc::now();

        self.add_event(Box::new(RoomEvent::updated(self)));

        true
    }
}

impl AggregateRoot for Room {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn metadata(&self) -> &AggregateMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut AggregateMetadata {
        &mut self.metadata
    }
}

impl EntityMetadata for Room {
    fn entity_name() -> &'static str {
        "Room"
    }
}
