// crates/temperature/src/application/record_temperature/record_temperature_use_case.rs

use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

use crate::application::record_temperature::RecordTemperatureCommand;
use crate::domain::replica::RoomTemperatureSummary;
use crate::domain::repositories::{RoomReplicaRepository, RoomSummaryRepository};

/// Enregistre une mesure contre la réplique locale. C'est le chemin de
/// lecture-écriture du service température : il ne parle JAMAIS au service
/// maison, la réplique suffit (cohérence à terme assumée).
pub struct RecordTemperatureUseCase {
    rooms: Arc<dyn RoomReplicaRepository>,
    summaries: Arc<dyn RoomSummaryRepository>,
}

impl RecordTemperatureUseCase {
    pub fn new(
        rooms: Arc<dyn RoomReplicaRepository>,
        summaries: Arc<dyn RoomSummaryRepository>,
    ) -> Self {
        Self { rooms, summaries }
    }

    pub async fn execute(&self, command: RecordTemperatureCommand) -> Result<RoomTemperatureSummary> {
        // La pièce doit être répliquée localement. Si elle ne l'est pas
        // (pas encore synchronisée, ou supprimée), la mesure est rejetée.
        let room = self
            .rooms
            .find_by_id(command.room_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "RoomReplica",
                id: command.room_id.to_string(),
            })?;

        let summary = match self.summaries.find_by_room(command.room_id).await? {
            Some(mut existing) => {
                existing.record(command.celsius.as_f64());
                existing
            }
            None => RoomTemperatureSummary::first_sample(
                room.room_id,
                room.house_id,
                command.celsius.as_f64(),
            ),
        };

        self.summaries.upsert(&summary).await?;

        Ok(summary)
    }
}
