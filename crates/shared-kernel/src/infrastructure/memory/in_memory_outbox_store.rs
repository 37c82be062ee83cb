// crates/shared-kernel/src/infrastructure/memory/in_memory_outbox_store.rs

use crate::domain::events::{DomainEvent, EventEnvelope};
use crate::domain::repositories::{OutboxRepository, OutboxStore, PendingEvent};
use crate::domain::transaction::Transaction;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// État observable d'une ligne outbox (assertions de tests).
#[derive(Debug, Clone)]
pub struct OutboxRowState {
    pub envelope: EventEnvelope,
    pub retry_count: i32,
    pub last_error: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub next_attempt_at: DateTime<Utc>,
    pub dead_lettered: bool,
}

/// Table outbox en mémoire, avec les mêmes règles d'éligibilité que la
/// version Postgres : au plus une ligne par agrégat (la plus ancienne non
/// publiée), jamais de dépassement d'une ligne en backoff ou dead-letter.
///
/// Implémente aussi `OutboxRepository` : les use cases du chemin d'écriture
/// peuvent brancher le pipeline complet en mémoire.
#[derive(Default)]
pub struct InMemoryOutboxStore {
    rows: Mutex<Vec<StoredRow>>,
    seq: AtomicU64,
}

struct StoredRow {
    seq: u64,
    state: OutboxRowState,
}

impl InMemoryOutboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<OutboxRowState> {
        self.rows.lock().unwrap().iter().map(|r| r.state.clone()).collect()
    }

    pub fn unpublished_count(&self) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.state.published_at.is_none())
            .count()
    }

    pub fn row(&self, id: Uuid) -> Option<OutboxRowState> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.state.envelope.id == id)
            .map(|r| r.state.clone())
    }

    fn append(&self, envelope: EventEnvelope) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(StoredRow {
            seq,
            state: OutboxRowState {
                envelope,
                retry_count: 0,
                last_error: None,
                published_at: None,
                next_attempt_at: Utc::now(),
                dead_lettered: false,
            },
        });
    }
}

#[async_trait]
impl OutboxRepository for InMemoryOutboxStore {
    async fn save(&self, _tx: &mut dyn Transaction, event: &dyn DomainEvent) -> Result<()> {
        self.append(EventEnvelope::wrap(event));
        Ok(())
    }
}

#[async_trait]
impl OutboxStore for InMemoryOutboxStore {
    async fn fetch_publishable(&self, limit: u32) -> Result<Vec<PendingEvent>> {
        let rows = self.rows.lock().unwrap();
        let now = Utc::now();

        // Agrégats gelés par une ligne dead-letter : rien n'en sort
        let frozen: HashSet<&str> = rows
            .iter()
            .filter(|r| r.state.dead_lettered)
            .map(|r| r.state.envelope.aggregate_id.as_str())
            .collect();

        let mut heads: Vec<&StoredRow> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        // Les lignes sont en ordre d'insertion : la première non publiée
        // rencontrée pour un agrégat est sa tête de file.
        for row in rows.iter() {
            if row.state.published_at.is_some() {
                continue;
            }
            let aggregate = row.state.envelope.aggregate_id.as_str();
            if !seen.insert(aggregate) {
                continue;
            }
            if frozen.contains(aggregate) {
                continue;
            }
            if row.state.dead_lettered || row.state.next_attempt_at > now {
                continue;
            }
            heads.push(row);
        }

        heads.sort_by_key(|r| r.seq);
        heads.truncate(limit as usize);

        Ok(heads
            .into_iter()
            .map(|r| PendingEvent {
                envelope: r.state.envelope.clone(),
                retry_count: r.state.retry_count,
            })
            .collect())
    }

    async fn mark_as_published(&self, ids: &[Uuid]) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut() {
            // Garde idempotente : une ligne déjà publiée n'est pas re-marquée
            if row.state.published_at.is_none() && ids.contains(&row.state.envelope.id) {
                row.state.published_at = Some(Utc::now());
            }
        }
        Ok(())
    }

    async fn mark_as_failed(
        &self,
        id: Uuid,
        last_error: String,
        next_attempt_at: DateTime<Utc>,
        dead_letter: bool,
    ) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.state.envelope.id == id) {
            row.state.retry_count += 1;
            row.state.last_error = Some(last_error);
            row.state.next_attempt_at = next_attempt_at;
            row.state.dead_lettered = dead_letter;
        }
        Ok(())
    }
}
