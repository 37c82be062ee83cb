// crates/temperature/src/application/apply_house_event/apply_house_event_command.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Événement maison décodé, prêt à appliquer sur la réplique.
/// `event_id` vient de l'enveloppe et sert de jeton d'idempotence.
#[derive(Debug, Clone)]
pub struct ApplyHouseEventCommand {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub change: HouseChange,
}

#[derive(Debug, Clone)]
pub enum HouseChange {
    Created {
        house_id: i64,
        name: String,
        address: Option<String>,
    },
    Updated {
        house_id: i64,
        name: String,
        address: Option<String>,
    },
    Deleted {
        house_id: i64,
    },
}
