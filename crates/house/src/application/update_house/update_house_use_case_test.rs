// crates/house/src/application/update_house/update_house_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::update_house::{UpdateHouseCommand, UpdateHouseUseCase};
    use crate::domain::entities::House;
    use crate::domain::value_objects::{HouseId, HouseName};
    use crate::utils::house_repository_stub::HouseRepositoryStub;
    use chrono::Utc;
    use shared_kernel::domain::repositories::OutboxRepoStub;
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::errors::DomainError;
    use std::sync::{Arc, Mutex};

    fn existing_house(name: &str) -> House {
        let now = Utc::now();
        House::hydrate(
            HouseId::new(1),
            HouseName::try_new(name).unwrap(),
            None,
            now,
            now,
            3,
        )
    }

    #[tokio::test]
    async fn test_update_house_emits_updated_event() {
        // Arrange
        let repo = Arc::new(HouseRepositoryStub {
            house_to_return: Mutex::new(Some(existing_house("Villa"))),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = UpdateHouseUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = UpdateHouseCommand {
            house_id: HouseId::new(1),
            name: HouseName::try_new("Villa Renovated").unwrap(),
            address: None,
        };

        // Act
        let house = use_case.execute(cmd).await.unwrap();

        // Assert
        assert_eq!(house.name.as_str(), "Villa Renovated");
        let saved = outbox.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].event_type, "house.updated");
        assert_eq!(saved[0].payload["data"]["name"], "Villa Renovated");
    }

    #[tokio::test]
    async fn test_update_house_noop_when_nothing_changes() {
        let repo = Arc::new(HouseRepositoryStub {
            house_to_return: Mutex::new(Some(existing_house("Villa"))),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = UpdateHouseUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = UpdateHouseCommand {
            house_id: HouseId::new(1),
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        };

        let result = use_case.execute(cmd).await;

        // Aucun changement : pas d'événement fantôme dans l'outbox
        assert!(result.is_ok());
        assert!(outbox.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_house_not_found() {
        let use_case = UpdateHouseUseCase::new(
            Arc::new(HouseRepositoryStub::default()),
            Arc::new(OutboxRepoStub::default()),
            Arc::new(StubTxManager),
        );

        let cmd = UpdateHouseCommand {
            house_id: HouseId::new(42),
            name: HouseName::try_new("Ghost").unwrap(),
            address: None,
        };

        let result = use_case.execute(cmd).await;

        assert!(matches!(result, Err(DomainError::NotFound { entity, .. }) if entity == "House"));
    }

    #[tokio::test]
    async fn test_update_house_retries_on_version_conflict_then_succeeds() {
        // Arrange : le premier save perd la course, le second passe
        let repo = Arc::new(HouseRepositoryStub {
            house_to_return: Mutex::new(Some(existing_house("Villa"))),
            save_conflicts_remaining: Mutex::new(1),
            ..Default::default()
        });
        let use_case = UpdateHouseUseCase::new(
            repo,
            Arc::new(OutboxRepoStub::default()),
            Arc::new(StubTxManager),
        );

        let cmd = UpdateHouseCommand {
            house_id: HouseId::new(1),
            name: HouseName::try_new("Villa Renovated").unwrap(),
            address: None,
        };

        // Act
        let result = use_case.execute(cmd).await;

        // Assert : le retry interne a absorbé le conflit
        assert!(result.is_ok());
    }
}
