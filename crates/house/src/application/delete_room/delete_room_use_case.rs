// crates/house/src/application/delete_room/delete_room_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use std::sync::Arc;

use crate::application::delete_room::DeleteRoomCommand;
use crate::domain::events::RoomEvent;
use crate::domain::repositories::RoomRepository;

pub struct DeleteRoomUseCase {
    repo: Arc<dyn RoomRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl DeleteRoomUseCase {
    pub fn new(
        repo: Arc<dyn RoomRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: DeleteRoomCommand) -> Result<()> {
        let room = self
            .repo
            .find_by_id(command.room_id)
            .await?
            .ok_or_not_found(command.room_id)?;

        let repo = Arc::clone(&self.repo);
        let outbox = Arc::clone(&self.outbox);
        let event = RoomEvent::deleted(room.id, room.house_id);
        let room_id = room.id;

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.delete(room_id, &mut *tx).await?;
                outbox.save(&mut *tx, &event).await?;
                Ok(tx)
            })
            .await
    }
}
