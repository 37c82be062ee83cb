// crates/shared-kernel/src/application/workers/outbox_processor.rs

use crate::application::ports::MessageProducer;
use crate::domain::repositories::{OutboxStore, PendingEvent};
use crate::errors::AppResult;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Politique de retry par ligne : backoff exponentiel + jitter, avec un
/// plafond de tentatives au-delà duquel la ligne part en dead-letter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_backoff_ms: 500,
            max_backoff_ms: 60_000,
        }
    }
}

impl RetryPolicy {
    /// Prochaine tentative pour une ligne qui vient d'échouer
    /// (`retry_count` = échecs AVANT celui-ci).
    pub fn next_attempt_at(&self, retry_count: i32) -> DateTime<Utc> {
        let exp = self
            .base_backoff_ms
            .saturating_mul(2u64.saturating_pow(retry_count.max(0) as u32))
            .min(self.max_backoff_ms);

        // Jitter (jusqu'à 25% de la base) pour désynchroniser les workers
        let jitter = rand::rng().random_range(0..exp / 4 + 1);

        Utc::now() + ChronoDuration::milliseconds((exp + jitter) as i64)
    }

    /// Vrai si l'échec en cours consomme la dernière tentative autorisée.
    pub fn is_exhausted(&self, retry_count: i32) -> bool {
        (retry_count.max(0) as u32) + 1 >= self.max_attempts
    }
}

pub struct OutboxProcessor<Store, Broker>
where
    Store: OutboxStore,
    Broker: MessageProducer,
{
    store: Store,
    broker: Broker,
    batch_size: u32,
    polling_interval: Duration,
    publish_timeout: Duration,
    retry_policy: RetryPolicy,
}

impl<Store, Broker> OutboxProcessor<Store, Broker>
where
    Store: OutboxStore,
    Broker: MessageProducer,
{
    pub fn new(
        store: Store,
        broker: Broker,
        batch_size: u32,
        interval: Duration,
        publish_timeout: Duration,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            store,
            broker,
            batch_size,
            polling_interval: interval,
            publish_timeout,
            retry_policy,
        }
    }

    pub async fn run(&self, mut shutdown_signal: tokio::sync::watch::Receiver<bool>) {
        tracing::info!("Outbox processor started");

        loop {
            // 1. Vérification immédiate du signal d'arrêt
            if *shutdown_signal.borrow() {
                break;
            }

            // 2. Traitement d'un batch
            let result = self.process_batch().await;

            let mut processed_count = 0;
            match result {
                Ok(count) => {
                    processed_count = count;
                    if count > 0 {
                        tracing::info!("Relayed {} events", count);
                    }
                }
                Err(e) => {
                    tracing::error!("Relay error: {:?}", e);
                }
            }

            // 3. Attente : si le batch était plein on reboucle tout de suite
            // (backlog à vider), sinon on attend l'intervalle ou l'arrêt.
            if processed_count < self.batch_size as usize {
                tokio::select! {
                    _ = sleep(self.polling_interval) => {},
                    _ = shutdown_signal.changed() => break,
                }
            }
        }

        tracing::info!("Outbox processor stopped gracefully");
    }

    /// Traite un lot et retourne le nombre d'événements publiés.
    /// Exposé pour piloter le processeur pas à pas dans les tests.
    pub async fn process_batch(&self) -> AppResult<usize> {
        let pending = self.store.fetch_publishable(self.batch_size).await?;

        if pending.is_empty() {
            return Ok(0);
        }

        // Le store ne rend que la tête de file de chaque agrégat : une ligne
        // en échec bloque d'elle-même les suivantes du même agrégat.
        let mut acked: Vec<uuid::Uuid> = Vec::with_capacity(pending.len());

        for event in &pending {
            match tokio::time::timeout(self.publish_timeout, self.broker.publish(&event.envelope)).await {
                Ok(Ok(())) => acked.push(event.envelope.id),
                Ok(Err(e)) => self.record_failure(event, e.to_string()).await?,
                Err(_) => {
                    let reason = format!("publish timed out after {:?}", self.publish_timeout);
                    self.record_failure(event, reason).await?;
                }
            }
        }

        // Marquage idempotent : un crash entre l'ack du bus et cet update
        // produit au pire une re-publication, absorbée par les consommateurs.
        self.store.mark_as_published(&acked).await?;

        Ok(acked.len())
    }

    async fn record_failure(&self, event: &PendingEvent, error: String) -> AppResult<()> {
        let dead_letter = self.retry_policy.is_exhausted(event.retry_count);
        let next_attempt_at = self.retry_policy.next_attempt_at(event.retry_count);

        if dead_letter {
            tracing::error!(
                "☠️ Outbox event {} ({} / {}) dead-lettered after {} attempts: {}",
                event.envelope.id,
                event.envelope.aggregate_type,
                event.envelope.aggregate_id,
                event.retry_count + 1,
                error
            );
        } else {
            tracing::warn!(
                "Publish failed for outbox event {} (attempt {}): {}",
                event.envelope.id,
                event.retry_count + 1,
                error
            );
        }

        self.store
            .mark_as_failed(event.envelope.id, error, next_attempt_at, dead_letter)
            .await?;

        Ok(())
    }
}
