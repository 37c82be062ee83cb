// crates/temperature/src/domain/repositories/house_replica_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use uuid::Uuid;

use crate::domain::replica::{ApplyOutcome, HouseReplica};

/// Port du store de répliques maison.
///
/// Toutes les écritures sont conditionnées par `last_event_id` (compare-and-
/// set) : deux applications concurrentes pour la même clé ne peuvent pas se
/// réordonner, un doublon retombe en `Ignored`. C'est la sérialisation
/// par clé exigée du côté consommateur.
#[async_trait]
pub trait HouseReplicaRepository: Send + Sync {
    /// Insère la réplique, ou la met à jour SEULEMENT si l'événement est
    /// strictement plus récent que `last_event_id` courant.
    async fn upsert_if_newer(&self, replica: &HouseReplica) -> Result<ApplyOutcome>;

    /// Supprime la réplique si l'événement de suppression est plus récent
    /// que le dernier appliqué. `Ignored` si absente ou périmé.
    async fn delete_if_newer(
        &self,
        house_id: i64,
        event_id: Uuid,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome>;

    async fn find_by_id(&self, house_id: i64) -> Result<Option<HouseReplica>>;

    /// Vue requêtable par l'API de lecture (hors du pipeline)
    async fn list_all(&self) -> Result<Vec<HouseReplica>>;

    async fn exists(&self, house_id: i64) -> Result<bool>;
}
