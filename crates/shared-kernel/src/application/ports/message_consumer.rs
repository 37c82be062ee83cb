// crates/shared-kernel/src/application/ports/message_consumer.rs

use crate::domain::events::EventEnvelope;
use crate::errors::AppResult;
use async_trait::async_trait;
use futures_util::future::BoxFuture;

/// Verdict du handler sur un message entrant.
///
/// La livraison est au-moins-une-fois : le handler doit être idempotent et
/// c'est lui qui décide du sort du message, pas le transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeDecision {
    /// Traité (ou doublon/stale ignoré) : on peut committer l'offset.
    Ack,
    /// Échec transitoire (stockage local indisponible, parent pas encore
    /// répliqué) : ne PAS committer, le message doit être relivré.
    Retry,
    /// Message poison (payload malformé, rejet définitif) : routé vers la
    /// file dead-letter puis committé, jamais retenté indéfiniment.
    DeadLetter,
}

pub type MessageHandler =
    Box<dyn Fn(EventEnvelope) -> BoxFuture<'static, ConsumeDecision> + Send + Sync>;

#[async_trait]
pub trait MessageConsumer: Send + Sync {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()>;
}
