// crates/shared-kernel/src/domain/repositories/outbox_repository.rs

use crate::domain::events::DomainEvent;
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use async_trait::async_trait;

/// Port d'écriture de l'outbox, côté chemin de mutation.
///
/// L'appel se fait TOUJOURS dans la transaction du domaine : la ligne outbox
/// et la mutation commitent ensemble ou pas du tout.
#[async_trait]
pub trait OutboxRepository: Send + Sync {
    /// Sauvegarde un événement dans la table outbox au sein d'une transaction existante.
    async fn save(&self, tx: &mut dyn Transaction, event: &dyn DomainEvent) -> Result<()>;
}
