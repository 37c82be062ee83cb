// crates/house/src/application/update_room/update_room_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::update_room::{UpdateRoomCommand, UpdateRoomUseCase};
    use crate::domain::entities::Room;
    use crate::domain::value_objects::{HouseId, RoomId, RoomName};
    use crate::utils::house_repository_stub::RoomRepositoryStub;
    use chrono::Utc;
    use shared_kernel::domain::repositories::OutboxRepoStub;
    use shared_kernel::domain::transaction::StubTxManager;
    use std::sync::{Arc, Mutex};

    fn existing_room(name: &str) -> Room {
        let now = Utc::now();
        Room::hydrate(
            RoomId::new(5),
            HouseId::new(1),
            RoomName::try_new(name).unwrap(),
            now,
            now,
            2,
        )
    }

    #[tokio::test]
    async fn test_update_room_emits_updated_event() {
        let repo = Arc::new(RoomRepositoryStub {
            room_to_return: Mutex::new(Some(existing_room("Bedroom"))),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = UpdateRoomUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = UpdateRoomCommand {
            room_id: RoomId::new(5),
            name: RoomName::try_new("Master bedroom").unwrap(),
        };

        let room = use_case.execute(cmd).await.unwrap();

        assert_eq!(room.name.as_str(), "Master bedroom");
        let saved = outbox.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].event_type, "room.updated");
    }

    #[tokio::test]
    async fn test_update_room_same_name_is_noop() {
        let repo = Arc::new(RoomRepositoryStub {
            room_to_return: Mutex::new(Some(existing_room("Bedroom"))),
            ..Default::default()
        });
        let outbox = Arc::new(OutboxRepoStub::default());
        let use_case = UpdateRoomUseCase::new(repo, outbox.clone(), Arc::new(StubTxManager));

        let cmd = UpdateRoomCommand {
            room_id: RoomId::new(5),
            name: RoomName::try_new("Bedroom").unwrap(),
        };

        let result = use_case.execute(cmd).await;

        assert!(result.is_ok());
        assert!(outbox.saved.lock().unwrap().is_empty());
    }
}
