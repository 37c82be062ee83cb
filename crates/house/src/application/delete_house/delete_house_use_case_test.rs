// crates/house/src/application/delete_house/delete_house_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::delete_house::{DeleteHouseCommand, DeleteHouseUseCase};
    use crate::domain::entities::House;
    use crate::domain::value_objects::{HouseId, HouseName};
    use crate::utils::house_repository_stub::HouseRepositoryStub;
    use chrono::Utc;
    use shared_kernel::domain::repositories::OutboxRepoStub;
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::errors::DomainError;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_delete_house_removes_row_and_emits_single_deleted_event() {
        // Arrange
        let now = Utc::now();
        let repo = Arc::new(HouseRepositoryStub {
            house_to_return: Mutex::new(Some(House::hydrate(
                HouseId::new(7),
                HouseName::try_new("Villa").unwrap(),
                None,
                now,
                now,
                1,
            ))),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = DeleteHouseUseCase::new(repo.clone(), outbox.clone(), Arc::new(StubTxManager));

        // Act
        use_case
            .execute(DeleteHouseCommand { house_id: HouseId::new(7) })
            .await
            .unwrap();

        // Assert
        assert_eq!(repo.deleted.lock().unwrap().as_slice(), &[HouseId::new(7)]);
        let saved = outbox.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].event_type, "house.deleted");
        assert_eq!(saved[0].aggregate_id, "7");
    }

    #[tokio::test]
    async fn test_delete_house_not_found() {
        let use_case = DeleteHouseUseCase::new(
            Arc::new(HouseRepositoryStub::default()),
            Arc::new(OutboxRepoStub::default()),
            Arc::new(StubTxManager),
        );

        let result = use_case
            .execute(DeleteHouseCommand { house_id: HouseId::new(404) })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
