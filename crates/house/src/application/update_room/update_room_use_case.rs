// crates/house/src/application/update_room/update_room_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{with_retry, RetryConfig};
use std::sync::Arc;

use crate::application::update_room::UpdateRoomCommand;
use crate::domain::entities::Room;
use crate::domain::repositories::RoomRepository;

pub struct UpdateRoomUseCase {
    repo: Arc<dyn RoomRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateRoomUseCase {
    pub fn new(
        repo: Arc<dyn RoomRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: UpdateRoomCommand) -> Result<Room> {
        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateRoomCommand) -> Result<Room> {
        let mut room = self
            .repo
            .find_by_id(cmd.room_id)
            .await?
            .ok_or_not_found(cmd.room_id)?;

        if !room.rename(cmd.name.clone()) {
            return Ok(room);
        }

        let events = room.pull_events();
        let repo = Arc::clone(&self.repo);
        let outbox = Arc::clone(&self.outbox);
        let snapshot = room.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.save(&snapshot, Some(&mut *tx)).await?;

                for event in &events {
                    outbox.save(&mut *tx, event.as_ref()).await?;
                }

                Ok(tx)
            })
            .await?;

        room.increment_version();
        Ok(room)
    }
}
