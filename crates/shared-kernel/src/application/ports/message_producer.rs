// crates/shared-kernel/src/application/ports/message_producer.rs

use crate::domain::events::EventEnvelope;
use crate::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait MessageProducer: Send + Sync {
    /// Publie un événement sérialisé (Enveloppe) vers le bus de messages.
    /// La clé de partition est `aggregate_id` : les événements d'une même
    /// entité restent sur la même partition.
    async fn publish(&self, event: &EventEnvelope) -> AppResult<()>;

    /// Publie un batch d'enveloppes (débit du dispatcher).
    async fn publish_batch(&self, events: &[EventEnvelope]) -> AppResult<()>;
}

#[async_trait]
impl<T: MessageProducer + ?Sized> MessageProducer for std::sync::Arc<T> {
    async fn publish(&self, event: &EventEnvelope) -> AppResult<()> {
        (**self).publish(event).await
    }

    async fn publish_batch(&self, events: &[EventEnvelope]) -> AppResult<()> {
        (**self).publish_batch(events).await
    }
}
