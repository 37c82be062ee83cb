// crates/house/src/application/create_room/create_room_use_case.rs

use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{internal_err, DomainError, Result};
use std::sync::{Arc, Mutex};

use crate::application::create_room::CreateRoomCommand;
use crate::domain::entities::Room;
use crate::domain::events::RoomEvent;
use crate::domain::repositories::{HouseRepository, RoomRepository};

pub struct CreateRoomUseCase {
    room_repo: Arc<dyn RoomRepository>,
    house_repo: Arc<dyn HouseRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl CreateRoomUseCase {
    pub fn new(
        room_repo: Arc<dyn RoomRepository>,
        house_repo: Arc<dyn HouseRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { room_repo, house_repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: CreateRoomCommand) -> Result<Room> {
        // 1. Le parent doit exister : rejet AVANT toute écriture.
        // La contrainte FK reste le filet de sécurité en cas de course avec
        // un delete_house concurrent.
        if !self.house_repo.exists_by_id(command.house_id).await? {
            return Err(DomainError::NotFound {
                entity: "House",
                id: command.house_id.to_string(),
            });
        }

        // 2. Transaction atomique : pièce + RoomCreated
        let repo = Arc::clone(&self.room_repo);
        let outbox = Arc::clone(&self.outbox);
        let CreateRoomCommand { house_id, name } = command;
        let created: Arc<Mutex<Option<Room>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&created);

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let room = repo.insert(house_id, &name, &mut *tx).await?;

                outbox.save(&mut *tx, &RoomEvent::created(&room)).await?;

                *slot.lock().unwrap() = Some(room);
                Ok(tx)
            })
            .await?;

        let result = created
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| internal_err("Room creation transaction yielded no aggregate"));
        result
    }
}
