// crates/temperature/src/application/apply_house_event/apply_house_event_use_case_test.rs

#[cfg(test)]
mod tests {
    use crate::application::apply_house_event::{
        ApplyHouseEventCommand, ApplyHouseEventUseCase, HouseChange,
    };
    use crate::domain::replica::{ApplyOutcome, RoomReplica, RoomTemperatureSummary};
    use crate::infrastructure::memory::InMemoryReplicaStore;
    use chrono::Utc;
    use shared_kernel::domain::transaction::StubTxManager;
    use std::sync::Arc;
    use uuid::Uuid;

    fn use_case(store: &Arc<InMemoryReplicaStore>) -> ApplyHouseEventUseCase {
        ApplyHouseEventUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(StubTxManager),
        )
    }

    fn created(event_id: Uuid, house_id: i64, name: &str) -> ApplyHouseEventCommand {
        ApplyHouseEventCommand {
            event_id,
            occurred_at: Utc::now(),
            change: HouseChange::Created {
                house_id,
                name: name.to_string(),
                address: None,
            },
        }
    }

    fn updated(event_id: Uuid, house_id: i64, name: &str) -> ApplyHouseEventCommand {
        ApplyHouseEventCommand {
            event_id,
            occurred_at: Utc::now(),
            change: HouseChange::Updated {
                house_id,
                name: name.to_string(),
                address: None,
            },
        }
    }

    fn deleted(event_id: Uuid, house_id: i64) -> ApplyHouseEventCommand {
        ApplyHouseEventCommand {
            event_id,
            occurred_at: Utc::now(),
            change: HouseChange::Deleted { house_id },
        }
    }

    #[tokio::test]
    async fn test_create_then_update_applies_in_order() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let use_case = use_case(&store);

        let e1 = Uuid::now_v7();
        let e2 = Uuid::now_v7();

        assert_eq!(use_case.execute(created(e1, 1, "Villa")).await.unwrap(), ApplyOutcome::Applied);
        assert_eq!(use_case.execute(updated(e2, 1, "Villa Renovated")).await.unwrap(), ApplyOutcome::Applied);

        let replica = store.house(1).unwrap();
        assert_eq!(replica.name, "Villa Renovated");
        assert_eq!(replica.last_event_id, e2);
    }

    #[tokio::test]
    async fn test_duplicate_event_is_ignored_and_state_unchanged() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let use_case = use_case(&store);

        let e1 = Uuid::now_v7();
        let e2 = Uuid::now_v7();

        use_case.execute(created(e1, 1, "Villa")).await.unwrap();
        use_case.execute(updated(e2, 1, "Villa Renovated")).await.unwrap();
        let before = store.house(1).unwrap();

        // Relivraison du même événement : no-op explicite
        let outcome = use_case.execute(updated(e2, 1, "Villa Renovated")).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Ignored);
        assert_eq!(store.house(1).unwrap(), before);
    }

    #[tokio::test]
    async fn test_stale_event_does_not_overwrite_newer_state() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let use_case = use_case(&store);

        let e1 = Uuid::now_v7();
        let e2 = Uuid::now_v7();

        // e2 (plus récent) appliqué d'abord, e1 arrive en retard
        use_case.execute(updated(e2, 1, "Villa Renovated")).await.unwrap();
        let outcome = use_case.execute(created(e1, 1, "Villa")).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Ignored);
        assert_eq!(store.house(1).unwrap().name, "Villa Renovated");
    }

    #[tokio::test]
    async fn test_delete_cascades_rooms_and_summaries() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let use_case = use_case(&store);

        use_case.execute(created(Uuid::now_v7(), 1, "Villa")).await.unwrap();
        use_case.execute(created(Uuid::now_v7(), 2, "Cottage")).await.unwrap();

        // Deux pièces + un résumé sous la maison 1, une pièce témoin sous la 2
        store.seed_room(RoomReplica::from_event(10, 1, "Living".into(), Uuid::now_v7()));
        store.seed_room(RoomReplica::from_event(11, 1, "Bedroom".into(), Uuid::now_v7()));
        store.seed_room(RoomReplica::from_event(20, 2, "Kitchen".into(), Uuid::now_v7()));
        store.seed_summary(RoomTemperatureSummary::first_sample(10, 1, 21.0));

        // Act
        let outcome = use_case.execute(deleted(Uuid::now_v7(), 1)).await.unwrap();

        // Assert : plus aucune pièce ni résumé sous la maison 1, la 2 intacte
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(store.house(1).is_none());
        assert!(store.rooms_of_house(1).is_empty());
        assert_eq!(store.summary_count(), 0);
        assert!(store.house(2).is_some());
        assert_eq!(store.room_count(), 1);
    }

    #[tokio::test]
    async fn test_stale_delete_is_a_noop() {
        let store = Arc::new(InMemoryReplicaStore::new());
        let use_case = use_case(&store);

        let stale = Uuid::now_v7();
        let newer = Uuid::now_v7();

        use_case.execute(created(newer, 1, "Villa")).await.unwrap();

        let outcome = use_case.execute(deleted(stale, 1)).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Ignored);
        assert!(store.house(1).is_some());
    }
}
