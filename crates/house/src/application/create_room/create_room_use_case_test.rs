// crates/house/src/application/create_room/create_room_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::create_room::{CreateRoomCommand, CreateRoomUseCase};
    use crate::domain::value_objects::{HouseId, RoomName};
    use crate::utils::house_repository_stub::{HouseRepositoryStub, RoomRepositoryStub};
    use shared_kernel::domain::repositories::OutboxRepoStub;
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::errors::DomainError;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_create_room_success() {
        // Arrange
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = CreateRoomUseCase::new(
            Arc::new(RoomRepositoryStub::default()),
            Arc::new(HouseRepositoryStub::default()),
            outbox.clone(),
            Arc::new(StubTxManager),
        );

        let cmd = CreateRoomCommand {
            house_id: HouseId::new(1),
            name: RoomName::try_new("Living room").unwrap(),
        };

        // Act
        let room = use_case.execute(cmd).await.unwrap();

        // Assert
        assert_eq!(room.house_id, HouseId::new(1));
        let saved = outbox.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].event_type, "room.created");
        assert_eq!(saved[0].payload["data"]["house_id"], 1);
    }

    #[tokio::test]
    async fn test_create_room_rejects_missing_parent_house_before_write() {
        // Arrange : la maison n'existe pas
        let house_repo = Arc::new(HouseRepositoryStub {
            exists_id_return: Mutex::new(false),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = CreateRoomUseCase::new(
            Arc::new(RoomRepositoryStub::default()),
            house_repo,
            outbox.clone(),
            Arc::new(StubTxManager),
        );

        let cmd = CreateRoomCommand {
            house_id: HouseId::new(99),
            name: RoomName::try_new("Orphan room").unwrap(),
        };

        // Act
        let result = use_case.execute(cmd).await;

        // Assert : validation synchrone, aucune écriture tentée
        assert!(matches!(result, Err(DomainError::NotFound { entity, .. }) if entity == "House"));
        assert!(outbox.saved.lock().unwrap().is_empty());
    }
}
