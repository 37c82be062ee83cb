// crates/house/src/domain/events/house_events.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_kernel::domain::events::DomainEvent;
use std::borrow::Cow;
use uuid::Uuid;

use crate::domain::entities::House;
use crate::domain::value_objects::HouseId;

/// Les événements portent un snapshot des champs publics de la maison au
/// moment de la mutation : le consommateur réplique sans rappeler la source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HouseEvent {
    HouseCreated {
        id: Uuid,
        house_id: HouseId,
        name: String,
        address: Option<String>,
        occurred_at: DateTime<Utc>,
    },

    HouseUpdated {
        id: Uuid,
        house_id: HouseId,
        name: String,
        address: Option<String>,
        occurred_at: DateTime<Utc>,
    },

    /// Suppression définitive (le consommateur cascade sur les pièces)
    HouseDeleted {
        id: Uuid,
        house_id: HouseId,
        occurred_at: DateTime<Utc>,
    },
}

impl HouseEvent {
    pub fn created(house: &House) -> Self {
        Self::HouseCreated {
            id: Uuid::now_v7(),
            house_id: house.id,
            name: house.name.as_str().to_string(),
            address: house.address.as_ref().map(|a| a.as_str().to_string()),
            occurred_at: house.created_at,
        }
    }

    pub fn updated(house: &House) -> Self {
        Self::HouseUpdated {
            id: Uuid::now_v7(),
            house_id: house.id,
            name: house.name.as_str().to_string(),
            address: house.address.as_ref().map(|a| a.as_str().to_string()),
            occurred_at: house.updated_at,
        }
    }

    pub fn deleted(house_id: HouseId) -> Self {
        Self::HouseDeleted {
            id: Uuid::now_v7(),
            house_id,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for HouseEvent {
    fn event_id(&self) -> Uuid {
        match self {
            Self::HouseCreated { id, .. }
            | Self::HouseUpdated { id, .. }
            | Self::HouseDeleted { id, .. } => *id,
        }
    }

    fn event_type(&self) -> Cow<'_, str> {
        match self {
            Self::HouseCreated { .. } => Cow::Borrowed("house.created"),
            Self::HouseUpdated { .. } => Cow::Borrowed("house.updated"),
            Self::HouseDeleted { .. } => Cow::Borrowed("house.deleted"),
        }
    }

    fn aggregate_type(&self) -> Cow<'_, str> {
        Cow::Borrowed("house")
    }

    fn aggregate_id(&self) -> String {
        match self {
            Self::HouseCreated { house_id, .. }
            | Self::HouseUpdated { house_id, .. }
            | Self::HouseDeleted { house_id, .. } => house_id.to_string(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::HouseCreated { occurred_at, .. }
            | Self::HouseUpdated { occurred_at, .. }
            | Self::HouseDeleted { occurred_at, .. } => *occurred_at,
        }
    }

    fn payload(&self) -> Value {
        json!(self)
    }
}
