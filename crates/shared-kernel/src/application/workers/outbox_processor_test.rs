// crates/shared-kernel/src/application/workers/outbox_processor_test.rs

use crate::application::ports::MessageProducer;
use crate::application::workers::{OutboxProcessor, RetryPolicy};
use crate::domain::events::EventEnvelope;
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::FakeTransaction;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::memory::{InMemoryMessageBus, InMemoryOutboxStore};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn envelope(aggregate_id: &str, event_type: &str) -> EventEnvelope {
    EventEnvelope {
        id: Uuid::now_v7(),
        aggregate_type: "house".to_string(),
        aggregate_id: aggregate_id.to_string(),
        event_type: event_type.to_string(),
        payload: serde_json::json!({ "name": "Villa" }),
        occurred_at: Utc::now(),
        metadata: None,
    }
}

async fn seed(store: &InMemoryOutboxStore, envelopes: &[EventEnvelope]) {
    let mut tx = FakeTransaction;
    for env in envelopes {
        store.save(&mut tx, env).await.unwrap();
    }
}

// --- BROKERS DE TEST ---

struct AlwaysFailBroker;

#[async_trait]
impl MessageProducer for AlwaysFailBroker {
    async fn publish(&self, _event: &EventEnvelope) -> AppResult<()> {
        Err(AppError::new(ErrorCode::InfrastructureFailure, "broker unreachable"))
    }
    async fn publish_batch(&self, _events: &[EventEnvelope]) -> AppResult<()> {
        Err(AppError::new(ErrorCode::InfrastructureFailure, "broker unreachable"))
    }
}

struct SlowBroker;

#[async_trait]
impl MessageProducer for SlowBroker {
    async fn publish(&self, _event: &EventEnvelope) -> AppResult<()> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(())
    }
    async fn publish_batch(&self, _events: &[EventEnvelope]) -> AppResult<()> {
        Ok(())
    }
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_backoff_ms: 0,
        max_backoff_ms: 0,
    }
}

#[tokio::test]
async fn test_publishes_heads_then_marks_published() {
    // Arrange : deux agrégats, deux événements chacun
    let store = Arc::new(InMemoryOutboxStore::new());
    let bus = Arc::new(InMemoryMessageBus::new());
    seed(&store, &[
        envelope("house-1", "house.created"),
        envelope("house-1", "house.updated"),
        envelope("house-2", "house.created"),
    ]).await;

    let processor = OutboxProcessor::new(
        store.clone(),
        bus.clone(),
        10,
        Duration::from_millis(10),
        Duration::from_secs(1),
        fast_policy(3),
    );

    // Act : premier lot = une tête par agrégat
    let first = processor.process_batch().await.unwrap();
    // Deuxième lot = la suite de house-1, maintenant débloquée
    let second = processor.process_batch().await.unwrap();

    // Assert
    assert_eq!(first, 2);
    assert_eq!(second, 1);
    assert_eq!(store.unpublished_count(), 0);
    assert_eq!(bus.queued_count(), 3);
}

#[tokio::test]
async fn test_failing_head_blocks_later_events_of_same_aggregate() {
    let store = Arc::new(InMemoryOutboxStore::new());
    let e1 = envelope("house-1", "house.created");
    let e2 = envelope("house-1", "house.updated");
    seed(&store, &[e1.clone(), e2.clone()]).await;

    let processor = OutboxProcessor::new(
        store.clone(),
        AlwaysFailBroker,
        10,
        Duration::from_millis(10),
        Duration::from_secs(1),
        fast_policy(5),
    );

    let published = processor.process_batch().await.unwrap();

    // Seule la tête a été tentée, et elle a échoué ; e2 n'a jamais été candidate
    assert_eq!(published, 0);
    let head = store.row(e1.id).unwrap();
    assert_eq!(head.retry_count, 1);
    assert!(head.last_error.is_some());
    let follower = store.row(e2.id).unwrap();
    assert_eq!(follower.retry_count, 0);
    assert!(follower.published_at.is_none());
}

#[tokio::test]
async fn test_retry_ceiling_moves_row_to_dead_letter_and_freezes_aggregate() {
    let store = Arc::new(InMemoryOutboxStore::new());
    let e1 = envelope("house-1", "house.created");
    let e2 = envelope("house-1", "house.updated");
    seed(&store, &[e1.clone(), e2.clone()]).await;

    let processor = OutboxProcessor::new(
        store.clone(),
        AlwaysFailBroker,
        10,
        Duration::from_millis(10),
        Duration::from_secs(1),
        fast_policy(2),
    );

    // Deux échecs = plafond atteint
    processor.process_batch().await.unwrap();
    processor.process_batch().await.unwrap();

    let head = store.row(e1.id).unwrap();
    assert_eq!(head.retry_count, 2);
    assert!(head.dead_lettered, "row must be flagged after exhausting retries");

    // L'agrégat est gelé : plus aucune ligne candidate, la ligne morte
    // n'est plus jamais retentée et e2 ne double pas e1
    let third = processor.process_batch().await.unwrap();
    assert_eq!(third, 0);
    assert_eq!(store.row(e1.id).unwrap().retry_count, 2);
    assert!(store.row(e2.id).unwrap().published_at.is_none());
}

#[tokio::test]
async fn test_publish_timeout_is_recorded_as_failure() {
    let store = Arc::new(InMemoryOutboxStore::new());
    let e1 = envelope("house-1", "house.created");
    seed(&store, &[e1.clone()]).await;

    let processor = OutboxProcessor::new(
        store.clone(),
        SlowBroker,
        10,
        Duration::from_millis(10),
        Duration::from_millis(20), // bien plus court que le broker
        fast_policy(5),
    );

    let published = processor.process_batch().await.unwrap();

    assert_eq!(published, 0);
    let row = store.row(e1.id).unwrap();
    assert_eq!(row.retry_count, 1);
    assert!(row.last_error.unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_mark_as_published_is_idempotent() {
    use crate::domain::repositories::OutboxStore;

    let store = InMemoryOutboxStore::new();
    let e1 = envelope("house-1", "house.created");
    seed(&store, &[e1.clone()]).await;

    store.mark_as_published(&[e1.id]).await.unwrap();
    let first_mark = store.row(e1.id).unwrap().published_at.unwrap();

    // Re-marquage (relecture après crash simulé) : aucun effet
    store.mark_as_published(&[e1.id]).await.unwrap();
    assert_eq!(store.row(e1.id).unwrap().published_at.unwrap(), first_mark);
    assert_eq!(store.unpublished_count(), 0);
}
