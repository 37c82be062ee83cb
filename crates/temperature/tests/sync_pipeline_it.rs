// crates/temperature/tests/sync_pipeline_it.rs
//
// Pipeline complet sur infrastructure en mémoire : use cases de mutation →
// outbox → processeur → bus → consommateur → réplique locale. Aucun broker
// ni base requis, les sémantiques (tête par agrégat, CAS, relivraison)
// sont les mêmes que les adaptateurs Postgres/Kafka.

use std::sync::Arc;
use std::time::Duration;

use house::application::create_house::{CreateHouseCommand, CreateHouseUseCase};
use house::application::create_room::{CreateRoomCommand, CreateRoomUseCase};
use house::application::delete_house::{DeleteHouseCommand, DeleteHouseUseCase};
use house::application::update_house::{UpdateHouseCommand, UpdateHouseUseCase};
use house::domain::value_objects::{HouseName, RoomName};
use house::infrastructure::memory::InMemoryHouseStore;

use shared_kernel::application::ports::{MessageHandler, MessageProducer};
use shared_kernel::application::workers::{OutboxProcessor, RetryPolicy};
use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::memory::{InMemoryMessageBus, InMemoryOutboxStore};

use temperature::application::apply_house_event::ApplyHouseEventUseCase;
use temperature::application::apply_room_event::ApplyRoomEventUseCase;
use temperature::application::record_temperature::{
    RecordTemperatureCommand, RecordTemperatureUseCase,
};
use temperature::domain::value_objects::TemperatureCelsius;
use temperature::infrastructure::kafka::HouseEventConsumer;
use temperature::infrastructure::memory::InMemoryReplicaStore;

struct Pipeline {
    houses: Arc<InMemoryHouseStore>,
    outbox: Arc<InMemoryOutboxStore>,
    bus: Arc<InMemoryMessageBus>,
    replicas: Arc<InMemoryReplicaStore>,
    processor: OutboxProcessor<Arc<InMemoryOutboxStore>, Arc<InMemoryMessageBus>>,
    handler: MessageHandler,
    create_house: CreateHouseUseCase,
    update_house: UpdateHouseUseCase,
    delete_house: DeleteHouseUseCase,
    create_room: CreateRoomUseCase,
    record_temperature: RecordTemperatureUseCase,
}

fn pipeline() -> Pipeline {
    let houses = Arc::new(InMemoryHouseStore::new());
    let outbox = Arc::new(InMemoryOutboxStore::new());
    let bus = Arc::new(InMemoryMessageBus::new());
    let replicas = Arc::new(InMemoryReplicaStore::new());
    let tx_manager = Arc::new(StubTxManager);

    let processor = OutboxProcessor::new(
        outbox.clone(),
        bus.clone(),
        16,
        Duration::from_millis(10),
        Duration::from_secs(1),
        RetryPolicy { max_attempts: 3, base_backoff_ms: 0, max_backoff_ms: 0 },
    );

    let apply_house = Arc::new(ApplyHouseEventUseCase::new(
        replicas.clone(),
        replicas.clone(),
        replicas.clone(),
        tx_manager.clone(),
    ));
    let apply_room = Arc::new(ApplyRoomEventUseCase::new(
        replicas.clone(),
        replicas.clone(),
        replicas.clone(),
        tx_manager.clone(),
    ));
    let handler = Arc::new(HouseEventConsumer::new(apply_house, apply_room)).into_handler();

    Pipeline {
        create_house: CreateHouseUseCase::new(houses.clone(), outbox.clone(), tx_manager.clone()),
        update_house: UpdateHouseUseCase::new(houses.clone(), outbox.clone(), tx_manager.clone()),
        delete_house: DeleteHouseUseCase::new(houses.clone(), outbox.clone(), tx_manager.clone()),
        create_room: CreateRoomUseCase::new(
            houses.clone(),
            houses.clone(),
            outbox.clone(),
            tx_manager,
        ),
        record_temperature: RecordTemperatureUseCase::new(replicas.clone(), replicas.clone()),
        houses,
        outbox,
        bus,
        replicas,
        processor,
        handler,
    }
}

impl Pipeline {
    /// Dispatch + consommation jusqu'à stabilisation.
    async fn sync(&self) {
        loop {
            let published = self.processor.process_batch().await.unwrap();
            let delivered = self.bus.deliver_all(&self.handler).await;
            if published == 0 && delivered == 0 {
                break;
            }
        }
    }
}

#[tokio::test]
async fn test_villa_scenario_create_then_update() {
    let p = pipeline();

    // 1. Create House "Villa"
    let villa = p
        .create_house
        .execute(CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        })
        .await
        .unwrap();

    // La ligne domaine existe, exactement une ligne outbox non publiée
    assert_eq!(p.houses.house_count(), 1);
    assert_eq!(p.outbox.unpublished_count(), 1);
    let pending = p.outbox.snapshot();
    assert_eq!(pending[0].envelope.event_type, "house.created");
    assert!(pending[0].published_at.is_none());

    // 2. Un tour de dispatcher + consommation
    p.sync().await;

    let rows = p.outbox.snapshot();
    assert!(rows[0].published_at.is_some());

    let replica = p.replicas.house(villa.id.as_i64()).unwrap();
    assert_eq!(replica.name, "Villa");
    let first_event_id = replica.last_event_id;

    // 3. Update → "Villa Renovated"
    p.update_house
        .execute(UpdateHouseCommand {
            house_id: villa.id,
            name: HouseName::try_new("Villa Renovated").unwrap(),
            address: None,
        })
        .await
        .unwrap();
    p.sync().await;

    let replica = p.replicas.house(villa.id.as_i64()).unwrap();
    assert_eq!(replica.name, "Villa Renovated");
    assert!(replica.last_event_id > first_event_id, "newer event id applied");
}

#[tokio::test]
async fn test_duplicate_delivery_leaves_replica_unchanged() {
    let p = pipeline();

    let villa = p
        .create_house
        .execute(CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        })
        .await
        .unwrap();
    p.sync().await;

    let before = p.replicas.house(villa.id.as_i64()).unwrap();

    // Re-publication du même événement (crash du dispatcher après ack,
    // avant marquage) : le consommateur doit l'absorber sans effet.
    let rows = p.outbox.snapshot();
    let envelope = rows[0].envelope.clone();
    p.bus.publish(&envelope).await.unwrap();
    p.bus.deliver_all(&p.handler).await;

    assert_eq!(p.replicas.house(villa.id.as_i64()).unwrap(), before);
    assert_eq!(p.replicas.house_count(), 1);
}

#[tokio::test]
async fn test_out_of_order_room_event_waits_for_its_house() {
    let p = pipeline();

    let villa = p
        .create_house
        .execute(CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        })
        .await
        .unwrap();
    let room = p
        .create_room
        .execute(CreateRoomCommand {
            house_id: villa.id,
            name: RoomName::try_new("Living room").unwrap(),
        })
        .await
        .unwrap();

    // Livraison inversée : le RoomCreated part sur le bus AVANT le
    // HouseCreated (désordre inter-agrégats possible côté broker).
    let snapshot = p.outbox.snapshot();
    let house_event = snapshot.iter().find(|r| r.envelope.event_type == "house.created").unwrap();
    let room_event = snapshot.iter().find(|r| r.envelope.event_type == "room.created").unwrap();
    p.bus.publish(&room_event.envelope).await.unwrap();
    p.bus.publish(&house_event.envelope).await.unwrap();

    let delivered = p.bus.deliver_all(&p.handler).await;

    // Le room event a été relivré après l'application du parent : les deux passent
    assert_eq!(delivered, 2);
    assert!(p.replicas.house(villa.id.as_i64()).is_some());
    assert_eq!(p.replicas.room(room.id.as_i64()).unwrap().house_id, villa.id.as_i64());
}

#[tokio::test]
async fn test_house_delete_cascades_to_rooms_and_summaries() {
    let p = pipeline();

    let villa = p
        .create_house
        .execute(CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        })
        .await
        .unwrap();
    let living = p
        .create_room
        .execute(CreateRoomCommand {
            house_id: villa.id,
            name: RoomName::try_new("Living room").unwrap(),
        })
        .await
        .unwrap();
    let bedroom = p
        .create_room
        .execute(CreateRoomCommand {
            house_id: villa.id,
            name: RoomName::try_new("Bedroom").unwrap(),
        })
        .await
        .unwrap();
    p.sync().await;

    // Des mesures arrivent sur la réplique synchronisée
    for room_id in [living.id.as_i64(), bedroom.id.as_i64()] {
        p.record_temperature
            .execute(RecordTemperatureCommand {
                room_id,
                celsius: TemperatureCelsius::try_new(21.0).unwrap(),
            })
            .await
            .unwrap();
    }
    assert_eq!(p.replicas.room_count(), 2);
    assert_eq!(p.replicas.summary_count(), 2);

    // Suppression de la maison : la cascade doit tout emporter côté réplique
    p.delete_house
        .execute(DeleteHouseCommand { house_id: villa.id })
        .await
        .unwrap();
    p.sync().await;

    assert!(p.replicas.house(villa.id.as_i64()).is_none());
    assert_eq!(p.replicas.room_count(), 0, "no room replicas left for the house");
    assert_eq!(p.replicas.summary_count(), 0, "no orphaned summaries");
}

#[tokio::test]
async fn test_broker_outage_dead_letters_after_retry_ceiling() {
    struct DownBroker;

    #[async_trait::async_trait]
    impl MessageProducer for DownBroker {
        async fn publish(&self, _: &shared_kernel::domain::events::EventEnvelope) -> AppResult<()> {
            Err(AppError::new(ErrorCode::InfrastructureFailure, "broker down"))
        }
        async fn publish_batch(
            &self,
            _: &[shared_kernel::domain::events::EventEnvelope],
        ) -> AppResult<()> {
            Err(AppError::new(ErrorCode::InfrastructureFailure, "broker down"))
        }
    }

    let houses = Arc::new(InMemoryHouseStore::new());
    let outbox = Arc::new(InMemoryOutboxStore::new());
    let tx_manager = Arc::new(StubTxManager);
    let create_house = CreateHouseUseCase::new(houses, outbox.clone(), tx_manager);

    let processor = OutboxProcessor::new(
        outbox.clone(),
        DownBroker,
        16,
        Duration::from_millis(10),
        Duration::from_secs(1),
        RetryPolicy { max_attempts: 2, base_backoff_ms: 0, max_backoff_ms: 0 },
    );

    create_house
        .execute(CreateHouseCommand {
            name: HouseName::try_new("Villa").unwrap(),
            address: None,
        })
        .await
        .unwrap();

    // Plafond = 2 tentatives, puis la ligne est figée pour l'opérateur
    processor.process_batch().await.unwrap();
    processor.process_batch().await.unwrap();
    let third = processor.process_batch().await.unwrap();

    let rows = outbox.snapshot();
    let row = &rows[0];
    assert_eq!(third, 0);
    assert!(row.dead_lettered);
    assert_eq!(row.retry_count, 2);
    assert!(row.published_at.is_none());
    assert!(row.last_error.as_deref().unwrap().contains("broker down"));
}
