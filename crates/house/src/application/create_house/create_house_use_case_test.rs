// crates/house/src/application/create_house/create_house_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::create_house::{CreateHouseCommand, CreateHouseUseCase};
    use crate::utils::house_repository_stub::HouseRepositoryStub;
    use crate::domain::value_objects::{Address, HouseName};
    use shared_kernel::domain::events::DomainEvent;
    use shared_kernel::domain::repositories::{OutboxRepoStub, OutboxRepository};
    use shared_kernel::domain::transaction::{StubTxManager, Transaction};
    use shared_kernel::errors::{DomainError, Result};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_create_house_success_writes_domain_row_and_one_event() {
        // Arrange
        let repo = Arc::new(HouseRepositoryStub::default());
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = CreateHouseUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: Some(Address::try_new("12 rue des Lilas").unwrap()),
        };

        // Act
        let house = use_case.execute(cmd).await.unwrap();

        // Assert : l'agrégat existe et exactement UN événement est en outbox
        assert_eq!(house.name.as_str(), "Villa");
        let saved = outbox.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].event_type, "house.created");
        assert_eq!(saved[0].aggregate_id, house.id.to_string());
        assert_eq!(saved[0].payload["type"], "HouseCreated");
        assert_eq!(saved[0].payload["data"]["name"], "Villa");
    }

    #[tokio::test]
    async fn test_create_house_rejects_duplicate_name_before_any_write() {
        // Arrange : le nom existe déjà
        let repo = Arc::new(HouseRepositoryStub {
            exists_name_return: Mutex::new(true),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = CreateHouseUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        };

        // Act
        let result = use_case.execute(cmd).await;

        // Assert : rejet synchrone, rien n'a été écrit
        assert!(matches!(result, Err(DomainError::AlreadyExists { field, .. }) if field == "name"));
        assert!(outbox.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_house_atomic_outbox_failure_fails_the_whole_mutation() {
        // Arrange : le repo est ok, mais l'outbox échoue
        struct FailingOutbox;
        #[async_trait::async_trait]
        impl OutboxRepository for FailingOutbox {
            async fn save(
                &self,
                _: &mut dyn Transaction,
                _: &dyn DomainEvent,
            ) -> Result<()> {
                Err(DomainError::Infrastructure("Outbox disk full".into()))
            }
        }

        let use_case = CreateHouseUseCase::new(
            Arc::new(HouseRepositoryStub::default()),
            Arc::new(FailingOutbox),
            Arc::new(StubTxManager),
        );

        let cmd = CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        };

        // Act
        let result = use_case.execute(cmd).await;

        // Assert : si l'outbox échoue, la création entière échoue (rollback tx)
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_house_storage_failure_is_transient_not_validation() {
        // Arrange : erreur DB à l'insertion
        let repo = Arc::new(HouseRepositoryStub {
            error_to_return: Mutex::new(Some(DomainError::Infrastructure("connection reset".into()))),
            ..Default::default()
        });
        let use_case = CreateHouseUseCase::new(
            repo,
            Arc::new(OutboxRepoStub::default()),
            Arc::new(StubTxManager),
        );

        let cmd = CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        };

        // Act
        let result = use_case.execute(cmd).await;

        // Assert : l'appelant peut distinguer un échec technique d'un rejet métier
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
