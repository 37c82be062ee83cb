// crates/house/src/application/update_house/update_house_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::{with_retry, RetryConfig};
use std::sync::Arc;

use crate::application::update_house::UpdateHouseCommand;
use crate::domain::entities::House;
use crate::domain::repositories::HouseRepository;

pub struct UpdateHouseUseCase {
    repo: Arc<dyn HouseRepository>,
    outbox: Arc<dyn OutboxRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateHouseUseCase {
    pub fn new(
        repo: Arc<dyn HouseRepository>,
        outbox: Arc<dyn OutboxRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, outbox, tx_manager }
    }

    pub async fn execute(&self, command: UpdateHouseCommand) -> Result<House> {
        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateHouseCommand) -> Result<House> {
        // 1. Chargement de l'agrégat
        let mut house = self
            .repo
            .find_by_id(cmd.house_id)
            .await?
            .ok_or_not_found(cmd.house_id)?;

        // 2. Mutation via le domaine ; pas de changement effectif = no-op
        if !house.rename(cmd.name.clone(), cmd.address.clone()) {
            return Ok(house);
        }

        // 3. Transaction atomique : save versionné + événements
        let events = house.pull_events();
        let repo = Arc::clone(&self.repo);
        let outbox = Arc::clone(&self.outbox);
        let snapshot = house.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.save(&snapshot, Some(&mut *tx)).await?;

                for event in &events {
                    outbox.save(&mut *tx, event.as_ref()).await?;
                }

                Ok(tx)
            })
            .await?;

        house.increment_version();
        Ok(house)
    }
}
