// crates/temperature/src/domain/replica/house_replica.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Copie locale, dénormalisée, d'une maison du service autoritaire.
///
/// `last_event_id` (UUID v7, ordonné dans le temps) est le jeton
/// d'idempotence : un événement dont l'id n'est pas strictement supérieur
/// est un doublon ou un retard, et ne s'applique pas. L'état correspond
/// toujours à UNE version que la source a réellement committée.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseReplica {
    pub house_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub last_event_id: Uuid,
    pub last_synced_at: DateTime<Utc>,
}

impl HouseReplica {
    pub fn from_event(
        house_id: i64,
        name: String,
        address: Option<String>,
        event_id: Uuid,
    ) -> Self {
        Self {
            house_id,
            name,
            address,
            last_event_id: event_id,
            last_synced_at: Utc::now(),
        }
    }
}
