// crates/temperature/src/application/apply_room_event/apply_room_event_use_case.rs

use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{DomainError, Result};
use std::sync::{Arc, Mutex};

use crate::application::apply_room_event::{ApplyRoomEventCommand, RoomChange};
use crate::domain::replica::{ApplyOutcome, RoomReplica};
use crate::domain::repositories::{
    HouseReplicaRepository, RoomReplicaRepository, RoomSummaryRepository,
};

pub struct ApplyRoomEventUseCase {
    houses: Arc<dyn HouseReplicaRepository>,
    rooms: Arc<dyn RoomReplicaRepository>,
    summaries: Arc<dyn RoomSummaryRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl ApplyRoomEventUseCase {
    pub fn new(
        houses: Arc<dyn HouseReplicaRepository>,
        rooms: Arc<dyn RoomReplicaRepository>,
        summaries: Arc<dyn RoomSummaryRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { houses, rooms, summaries, tx_manager }
    }

    pub async fn execute(&self, command: ApplyRoomEventCommand) -> Result<ApplyOutcome> {
        match command.change {
            RoomChange::Created { room_id, house_id, name }
            | RoomChange::Updated { room_id, house_id, name } => {
                // Une pièce ne se réplique jamais avant sa maison : si le
                // HouseCreated n'est pas encore passé (livraison désordonnée
                // entre agrégats), on refuse SANS ack : le bus relivrera le
                // message jusqu'à ce que le parent existe. Jamais de réplique
                // orpheline, jamais de drop silencieux.
                if !self.houses.exists(house_id).await? {
                    return Err(DomainError::NotFound {
                        entity: "HouseReplica",
                        id: house_id.to_string(),
                    });
                }

                let replica = RoomReplica::from_event(room_id, house_id, name, command.event_id);
                self.rooms.upsert_if_newer(&replica).await
            }

            RoomChange::Deleted { room_id, .. } => {
                self.delete_with_cascade(room_id, command.event_id).await
            }
        }
    }

    /// La pièce part d'abord (gardée par `last_event_id`), son résumé de
    /// température suit dans la même transaction.
    async fn delete_with_cascade(&self, room_id: i64, event_id: uuid::Uuid) -> Result<ApplyOutcome> {
        let rooms = Arc::clone(&self.rooms);
        let summaries = Arc::clone(&self.summaries);
        let outcome = Arc::new(Mutex::new(ApplyOutcome::Ignored));
        let slot = Arc::clone(&outcome);

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let deleted = rooms.delete_if_newer(room_id, event_id, Some(&mut *tx)).await?;

                if deleted == ApplyOutcome::Applied {
                    summaries.delete_by_room(room_id, Some(&mut *tx)).await?;
                }

                *slot.lock().unwrap() = deleted;
                Ok(tx)
            })
            .await?;

        let result = *outcome.lock().unwrap();
        Ok(result)
    }
}
