// crates/temperature/src/domain/repositories/room_replica_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use uuid::Uuid;

use crate::domain::replica::{ApplyOutcome, RoomReplica};

#[async_trait]
pub trait RoomReplicaRepository: Send + Sync {
    async fn upsert_if_newer(&self, replica: &RoomReplica) -> Result<ApplyOutcome>;

    async fn delete_if_newer(
        &self,
        room_id: i64,
        event_id: Uuid,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome>;

    /// Cascade : supprime toutes les pièces d'une maison. Retourne le nombre
    /// de répliques retirées.
    async fn delete_by_house(&self, house_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64>;

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomReplica>>;

    async fn list_by_house(&self, house_id: i64) -> Result<Vec<RoomReplica>>;
}
