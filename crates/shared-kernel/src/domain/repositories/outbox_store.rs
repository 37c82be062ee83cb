// crates/shared-kernel/src/domain/repositories/outbox_store.rs

use crate::domain::events::EventEnvelope;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ligne outbox prête à publier, avec son compteur d'échecs courant
/// (le processeur en a besoin pour calculer le prochain backoff).
#[derive(Debug, Clone)]
pub struct PendingEvent {
    pub envelope: EventEnvelope,
    pub retry_count: i32,
}

/// Port de lecture/marquage de l'outbox, côté dispatcher.
///
/// Le chemin d'écriture ne fait qu'insérer, le dispatcher ne fait que
/// lire-et-marquer : aucune contention écriture/écriture sur les mêmes lignes.
#[async_trait]
pub trait OutboxStore: Send + Sync {
    /// Récupère au plus `limit` lignes publiables, au plus UNE par agrégat :
    /// la plus ancienne ligne non publiée de chaque agrégat, et seulement si
    /// elle est éligible (pas en backoff, pas dead-letter). Une ligne plus
    /// récente ne double jamais une plus ancienne en échec.
    async fn fetch_publishable(&self, limit: u32) -> Result<Vec<PendingEvent>>;

    /// Marque les lignes acquittées par le bus. Idempotent : seules les
    /// lignes encore non publiées sont touchées, un double marquage est sans effet.
    async fn mark_as_published(&self, ids: &[Uuid]) -> Result<()>;

    /// Enregistre un échec de publication : incrémente retry_count, garde la
    /// dernière erreur, programme la prochaine tentative. `dead_letter` fige
    /// la ligne pour intervention opérateur.
    async fn mark_as_failed(
        &self,
        id: Uuid,
        last_error: String,
        next_attempt_at: DateTime<Utc>,
        dead_letter: bool,
    ) -> Result<()>;
}

// Permet de partager un store entre le processeur et le code de test/wiring.
#[async_trait]
impl<T: OutboxStore + ?Sized> OutboxStore for std::sync::Arc<T> {
    async fn fetch_publishable(&self, limit: u32) -> Result<Vec<PendingEvent>> {
        (**self).fetch_publishable(limit).await
    }

    async fn mark_as_published(&self, ids: &[Uuid]) -> Result<()> {
        (**self).mark_as_published(ids).await
    }

    async fn mark_as_failed(
        &self,
        id: Uuid,
        last_error: String,
        next_attempt_at: DateTime<Utc>,
        dead_letter: bool,
    ) -> Result<()> {
        (**self).mark_as_failed(id, last_error, next_attempt_at, dead_letter).await
    }
}
