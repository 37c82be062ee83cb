// crates/temperature/src/application/apply_room_event/apply_room_event_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::apply_house_event::{
        ApplyHouseEventCommand, ApplyHouseEventUseCase, HouseChange,
    };
    use crate::application::apply_room_event::{
        ApplyRoomEventCommand, ApplyRoomEventUseCase, RoomChange,
    };
    use crate::domain::replica::{ApplyOutcome, RoomTemperatureSummary};
    use crate::infrastructure::memory::InMemoryReplicaStore;
    use chrono::Utc;
    use shared_kernel::domain::transaction::StubTxManager;
    use shared_kernel::errors::DomainError;
    use std::sync::Arc;
    use uuid::Uuid;

    fn use_cases(store: &Arc<InMemoryReplicaStore>) -> (ApplyHouseEventUseCase, ApplyRoomEventUseCase) {
        (
            ApplyHouseEventUseCase::new(
                store.clone(),
                store.clone(),
                store.clone(),
                Arc::new(StubTxManager),
            ),
            ApplyRoomEventUseCase::new(
                store.clone(),
                store.clone(),
                store.clone(),
                Arc::new(StubTxManager),
            ),
        )
    }

    fn house_created(house_id: i64) -> ApplyHouseEventCommand {
        ApplyHouseEventCommand {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            change: HouseChange::Created {
                house_id,
                name: "Villa".to_string(),
                address: None,
            },
        }
    }

    fn room_created(event_id: Uuid, room_id: i64, house_id: i64) -> ApplyRoomEventCommand {
        ApplyRoomEventCommand {
            event_id,
            occurred_at: Utc::now(),
            change: RoomChange::Created {
                room_id,
                house_id,
                name: "Living room".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_room_created_after_parent_house_is_applied() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let (apply_house, apply_room) = use_cases(&store);

        apply_house.execute(house_created(1)).await.unwrap();

        let outcome = apply_room.execute(room_created(Uuid::now_v7(), 10, 1)).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(store.room(10).unwrap().house_id, 1);
    }

    #[tokio::test]
    async fn test_room_created_before_parent_house_is_rejected_for_redelivery() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let (apply_house, apply_room) = use_cases(&store);

        // Le RoomCreated arrive AVANT le HouseCreated : rejet transitoire
        let result = apply_room.execute(room_created(Uuid::now_v7(), 10, 1)).await;

        assert!(matches!(result, Err(DomainError::NotFound { entity, .. }) if entity == "HouseReplica"));
        assert!(store.room(10).is_none(), "no orphaned room replica");

        // Après application du parent, la relivraison passe
        apply_house.execute(house_created(1)).await.unwrap();
        let outcome = apply_room.execute(room_created(Uuid::now_v7(), 10, 1)).await.unwrap();
        assert_eq!(outcome, ApplyOutcome::Applied);
    }

    #[tokio::test]
    async fn test_room_update_is_idempotent() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let (apply_house, apply_room) = use_cases(&store);

        apply_house.execute(house_created(1)).await.unwrap();
        apply_room.execute(room_created(Uuid::now_v7(), 10, 1)).await.unwrap();

        let e2 = Uuid::now_v7();
        let update = ApplyRoomEventCommand {
            event_id: e2,
            occurred_at: Utc::now(),
            change: RoomChange::Updated {
                room_id: 10,
                house_id: 1,
                name: "Master bedroom".to_string(),
            },
        };

        assert_eq!(apply_room.execute(update.clone()).await.unwrap(), ApplyOutcome::Applied);
        // Seconde application du même événement : état inchangé
        assert_eq!(apply_room.execute(update).await.unwrap(), ApplyOutcome::Ignored);
        assert_eq!(store.room(10).unwrap().name, "Master bedroom");
        assert_eq!(store.room(10).unwrap().last_event_id, e2);
    }

    #[tokio::test]
    async fn test_room_deleted_removes_replica_and_summary() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let (apply_house, apply_room) = use_cases(&store);

        apply_house.execute(house_created(1)).await.unwrap();
        apply_room.execute(room_created(Uuid::now_v7(), 10, 1)).await.unwrap();
        store.seed_summary(RoomTemperatureSummary::first_sample(10, 1, 19.5));

        let outcome = apply_room
            .execute(ApplyRoomEventCommand {
                event_id: Uuid::now_v7(),
                occurred_at: Utc::now(),
                change: RoomChange::Deleted { room_id: 10, house_id: 1 },
            })
            .await
            .unwrap();

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(store.room(10).is_none());
        assert!(store.summary(10).is_none());
    }
}
