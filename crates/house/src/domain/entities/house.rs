// crates/house/src/domain/entities/house.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::events::{AggregateMetadata, AggregateRoot};

use crate::domain::events::HouseEvent;
use crate::domain::value_objects::{Address, HouseId, HouseName};

/// Agrégat maison, côté autoritaire.
///
/// L'ID vient de la séquence de la base : une instance n'existe qu'après
/// insertion (c'est le repository qui la construit). Les mutations passent
/// par les méthodes du domaine, qui enregistrent l'événement correspondant
/// dans la file de l'agrégat pour l'outbox.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct House {
    pub id: HouseId,
    pub name: HouseName,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: AggregateMetadata,
}

impl House {
    /// Reconstruction depuis la base (aucun événement en file)
    pub fn hydrate(
        id: HouseId,
        name: HouseName,
        address: Option<Address>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i32,
    ) -> Self {
        Self {
            id,
            name,
            address,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    /// Renomme et/ou déménage la maison. Retourne false si rien ne change
    /// (aucun événement émis, aucune écriture à faire).
    pub fn rename(&mut self, new_name: HouseName, new_address: Option<Address>) -> bool {
        if self.name == new_name && self.address == new_address {
            return false;
        }

        self.name = new_name;
        self.address = new_address;
        self.updated_at = Utc::now();

        self.add_event(Box::new(HouseEvent::updated(self)));

        true
    }
}

impl AggregateRoot for House {
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

impl EntityMetadata for House {
    fn entity_name() -> &'static str {
        "House"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "houses_name_key" => "name",
            _ => "unique_constraint",
        }
    }
}
