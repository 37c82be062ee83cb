// crates/temperature/src/application/apply_house_event/apply_house_event_use_case.rs

use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use std::sync::{Arc, Mutex};

use crate::application::apply_house_event::{ApplyHouseEventCommand, HouseChange};
use crate::domain::replica::{ApplyOutcome, HouseReplica};
use crate::domain::repositories::{
    HouseReplicaRepository, RoomReplicaRepository, RoomSummaryRepository,
};

/// Applique un événement maison sur la réplique locale, exactement-une-fois
/// en EFFET : la livraison est au-moins-une-fois et possiblement désordonnée,
/// le compare-and-set sur `last_event_id` absorbe doublons et retards.
pub struct ApplyHouseEventUseCase {
    houses: Arc<dyn HouseReplicaRepository>,
    rooms: Arc<dyn RoomReplicaRepository>,
    summaries: Arc<dyn RoomSummaryRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl ApplyHouseEventUseCase {
    pub fn new(
        houses: Arc<dyn HouseReplicaRepository>,
        rooms: Arc<dyn RoomReplicaRepository>,
        summaries: Arc<dyn RoomSummaryRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { houses, rooms, summaries, tx_manager }
    }

    pub async fn execute(&self, command: ApplyHouseEventCommand) -> Result<ApplyOutcome> {
        match command.change {
            // Created et Updated partagent le même upsert conditionnel :
            // l'insert couvre la création, la garde couvre la mise à jour.
            HouseChange::Created { house_id, name, address }
            | HouseChange::Updated { house_id, name, address } => {
                let replica = HouseReplica::from_event(house_id, name, address, command.event_id);
                self.houses.upsert_if_newer(&replica).await
            }

            HouseChange::Deleted { house_id } => {
                self.delete_with_cascade(house_id, command.event_id).await
            }
        }
    }

    /// Cascade transactionnelle : la maison part d'abord (gardée par
    /// `last_event_id`, un Deleted périmé ne détruit rien), puis ses pièces,
    /// puis leurs résumés de température. Tout ou rien.
    async fn delete_with_cascade(
        &self,
        house_id: i64,
        event_id: uuid::Uuid,
    ) -> Result<ApplyOutcome> {
        let houses = Arc::clone(&self.houses);
        let rooms = Arc::clone(&self.rooms);
        let summaries = Arc::clone(&self.summaries);
        let outcome = Arc::new(Mutex::new(ApplyOutcome::Ignored));
        let slot = Arc::clone(&outcome);

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let deleted = houses
                    .delete_if_newer(house_id, event_id, Some(&mut *tx))
                    .await?;

                if deleted == ApplyOutcome::Applied {
                    let removed_rooms = rooms.delete_by_house(house_id, Some(&mut *tx)).await?;
                    let removed_summaries =
                        summaries.delete_by_house(house_id, Some(&mut *tx)).await?;

                    tracing::info!(
                        "House {} removed from replica ({} rooms, {} summaries cascaded)",
                        house_id,
                        removed_rooms,
                        removed_summaries
                    );
                }

                *slot.lock().unwrap() = deleted;
                Ok(tx)
            })
            .await?;

        let result = *outcome.lock().unwrap();
        Ok(result)
    }
}
