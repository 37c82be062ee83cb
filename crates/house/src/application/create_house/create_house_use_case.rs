// crates/house/src/application/create_house/create_house_use_case.rs

use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::{internal_err, DomainError, Result};
use std::sync::{Arc, Mutex};

use crate::application::create_house::CreateHouseCommand;
use crate::domain::entities::House;
use crate::domain::events::HouseEvent;
use crate::domain::repositories::HouseRepository;

pub struct CreateHouseUseCase {
    repo: Arc<dyn HouseRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl CreateHouseUseCase {
    pub fn new(
        repo: Arc<dyn HouseRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: CreateHouseCommand) -> Result<House> {
        // 1. Unicité métier AVANT toute écriture
        if self.repo.exists_by_name(&command.name).await? {
            return Err(DomainError::AlreadyExists {
                entity: "House",
                field: "name",
                value: command.name.as_str().to_string(),
            });
        }

        // 2. Transaction atomique : ligne maison + ligne outbox, ou rien.
        // L'ID vient de la séquence, l'événement est donc construit après l'insert.
        let repo = Arc::clone(&self.repo);
        let outbox = Arc::clone(&self.outbox);
        let CreateHouseCommand { name, address } = command;
        let created: Arc<Mutex<Option<House>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&created);

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let house = repo.insert(&name, address.as_ref(), &mut *tx).await?;

                outbox.save(&mut *tx, &HouseEvent::created(&house)).await?;

                *slot.lock().unwrap() = Some(house);
                Ok(tx)
            })
            .await?;

        let result = created
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| internal_err("House creation transaction yielded no aggregate"));
        result
    }
}
