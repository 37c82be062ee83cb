// crates/shared-kernel/src/domain/repositories/outbox_repository_stub.rs

use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::domain::repositories::OutboxRepository;
use crate::domain::transaction::Transaction;
use std::sync::Mutex;

// --- STUB OUTBOX ---
// Enregistre les enveloppes en mémoire pour que les tests de use case
// puissent vérifier ce qui serait parti dans la table outbox.
#[derive(Default)]
pub struct OutboxRepoStub {
    pub saved: Mutex<Vec<EventEnvelope>>,
}

#[async_trait::async_trait]
impl OutboxRepository for OutboxRepoStub {
    async fn save(&self, _tx: &mut dyn Transaction, event: &dyn DomainEvent) -> crate::errors::Result<()> {
        self.saved.lock().unwrap().push(EventEnvelope::wrap(event));
        Ok(())
    }
}
