// crates/shared-kernel/src/infrastructure/memory/in_memory_bus.rs

use crate::application::ports::{ConsumeDecision, MessageConsumer, MessageHandler, MessageProducer};
use crate::domain::events::EventEnvelope;
use crate::errors::AppResult;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Bus en mémoire : une file FIFO unique, livraison au-moins-une-fois.
///
/// Implémente les deux ports (producer + consumer) pour faire tourner le
/// pipeline complet en local ou dans les tests, sans broker. `Retry` remet
/// le message en queue (relivraison), `DeadLetter` l'archive à part.
#[derive(Default)]
pub struct InMemoryMessageBus {
    queue: Mutex<VecDeque<EventEnvelope>>,
    dead_letters: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryMessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queued_count(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    pub fn dead_letters(&self) -> Vec<EventEnvelope> {
        self.dead_letters.lock().unwrap().clone()
    }

    /// Livre les messages en attente jusqu'à épuisement de la file, et
    /// retourne le nombre de messages acquittés. Les messages en `Retry`
    /// repassent en fin de file ; si un tour complet ne fait plus aucun
    /// progrès, on s'arrête en les laissant en attente (relivraison future).
    pub async fn deliver_all(&self, handler: &MessageHandler) -> usize {
        let mut acked = 0;
        let mut stalled_streak = 0;

        loop {
            let envelope = { self.queue.lock().unwrap().pop_front() };
            let Some(envelope) = envelope else { break };

            match handler(envelope.clone()).await {
                ConsumeDecision::Ack => {
                    acked += 1;
                    stalled_streak = 0;
                }
                ConsumeDecision::Retry => {
                    let remaining = {
                        let mut queue = self.queue.lock().unwrap();
                        queue.push_back(envelope);
                        queue.len()
                    };
                    stalled_streak += 1;
                    if stalled_streak >= remaining {
                        break;
                    }
                }
                ConsumeDecision::DeadLetter => {
                    self.dead_letters.lock().unwrap().push(envelope);
                    stalled_streak = 0;
                }
            }
        }

        acked
    }
}

#[async_trait]
impl MessageProducer for InMemoryMessageBus {
    async fn publish(&self, event: &EventEnvelope) -> AppResult<()> {
        self.queue.lock().unwrap().push_back(event.clone());
        Ok(())
    }

    async fn publish_batch(&self, events: &[EventEnvelope]) -> AppResult<()> {
        let mut queue = self.queue.lock().unwrap();
        for event in events {
            queue.push_back(event.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl MessageConsumer for InMemoryMessageBus {
    async fn consume(&self, _topic: &str, handler: MessageHandler) -> AppResult<()> {
        self.deliver_all(&handler).await;
        Ok(())
    }
}
