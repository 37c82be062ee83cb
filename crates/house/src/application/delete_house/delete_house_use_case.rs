// crates/house/src/application/delete_house/delete_house_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use std::sync::Arc;

use crate::application::delete_house::DeleteHouseCommand;
use crate::domain::events::HouseEvent;
use crate::domain::repositories::HouseRepository;

pub struct DeleteHouseUseCase {
    repo: Arc<dyn HouseRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl DeleteHouseUseCase {
    pub fn new(
        repo: Arc<dyn HouseRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: DeleteHouseCommand) -> Result<()> {
        let house = self
            .repo
            .find_by_id(command.house_id)
            .await?
            .ok_or_not_found(command.house_id)?;

        let repo = Arc::clone(&self.repo);
        let outbox = Arc::clone(&self.outbox);
        let event = HouseEvent::deleted(house.id);
        let house_id = house.id;

        // Côté autoritaire, les pièces partent avec la maison (FK ON DELETE
        // CASCADE). Côté réplique, c'est l'événement HouseDeleted qui pilote
        // la cascade : on n'émet donc qu'un seul événement.
        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.delete(house_id, &mut *tx).await?;
                outbox.save(&mut *tx, &event).await?;
                Ok(tx)
            })
            .await
    }
}
