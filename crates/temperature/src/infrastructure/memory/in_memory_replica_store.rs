// crates/temperature/src/infrastructure/memory/in_memory_replica_store.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use std::collections::BTreeMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::replica::{ApplyOutcome, HouseReplica, RoomReplica, RoomTemperatureSummary};
use crate::domain::repositories::{
    HouseReplicaRepository, RoomReplicaRepository, RoomSummaryRepository,
};

/// Store de répliques en mémoire, avec exactement la même sémantique
/// compare-and-set que la version Postgres (`last_event_id` strictement
/// croissant). Utilisé par les tests unitaires et le test de pipeline.
#[derive(Default)]
pub struct InMemoryReplicaStore {
    houses: Mutex<BTreeMap<i64, HouseReplica>>,
    rooms: Mutex<BTreeMap<i64, RoomReplica>>,
    summaries: Mutex<BTreeMap<i64, RoomTemperatureSummary>>,
}

impl InMemoryReplicaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn house_count(&self) -> usize {
        self.houses.lock().unwrap().len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.lock().unwrap().len()
    }

    pub fn summary_count(&self) -> usize {
        self.summaries.lock().unwrap().len()
    }

    // Accesseurs directs (assertions de tests) : évitent de passer par les
    // traits, dont plusieurs portent des méthodes homonymes.

    pub fn house(&self, house_id: i64) -> Option<HouseReplica> {
        self.houses.lock().unwrap().get(&house_id).cloned()
    }

    pub fn room(&self, room_id: i64) -> Option<RoomReplica> {
        self.rooms.lock().unwrap().get(&room_id).cloned()
    }

    pub fn summary(&self, room_id: i64) -> Option<RoomTemperatureSummary> {
        self.summaries.lock().unwrap().get(&room_id).cloned()
    }

    pub fn rooms_of_house(&self, house_id: i64) -> Vec<RoomReplica> {
        self.rooms
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.house_id == house_id)
            .cloned()
            .collect()
    }

    pub fn seed_room(&self, replica: RoomReplica) {
        self.rooms.lock().unwrap().insert(replica.room_id, replica);
    }

    pub fn seed_summary(&self, summary: RoomTemperatureSummary) {
        self.summaries.lock().unwrap().insert(summary.room_id, summary);
    }
}

#[async_trait]
impl HouseReplicaRepository for InMemoryReplicaStore {
    async fn upsert_if_newer(&self, replica: &HouseReplica) -> Result<ApplyOutcome> {
        let mut houses = self.houses.lock().unwrap();

        match houses.get_mut(&replica.house_id) {
            None => {
                houses.insert(replica.house_id, replica.clone());
                Ok(ApplyOutcome::Applied)
            }
            // CAS : uniquement si strictement plus récent
            Some(current) if current.last_event_id < replica.last_event_id => {
                *current = replica.clone();
                Ok(ApplyOutcome::Applied)
            }
            Some(_) => Ok(ApplyOutcome::Ignored),
        }
    }

    async fn delete_if_newer(
        &self,
        house_id: i64,
        event_id: Uuid,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome> {
        let mut houses = self.houses.lock().unwrap();

        match houses.get(&house_id) {
            Some(current) if current.last_event_id < event_id => {
                houses.remove(&house_id);
                Ok(ApplyOutcome::Applied)
            }
            _ => Ok(ApplyOutcome::Ignored),
        }
    }

    async fn find_by_id(&self, house_id: i64) -> Result<Option<HouseReplica>> {
        Ok(self.houses.lock().unwrap().get(&house_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<HouseReplica>> {
        Ok(self.houses.lock().unwrap().values().cloned().collect())
    }

    async fn exists(&self, house_id: i64) -> Result<bool> {
        Ok(self.houses.lock().unwrap().contains_key(&house_id))
    }
}

#[async_trait]
impl RoomReplicaRepository for InMemoryReplicaStore {
    async fn upsert_if_newer(&self, replica: &RoomReplica) -> Result<ApplyOutcome> {
        let mut rooms = self.rooms.lock().unwrap();

        match rooms.get_mut(&replica.room_id) {
            None => {
                rooms.insert(replica.room_id, replica.clone());
                Ok(ApplyOutcome::Applied)
            }
            Some(current) if current.last_event_id < replica.last_event_id => {
                *current = replica.clone();
                Ok(ApplyOutcome::Applied)
            }
            Some(_) => Ok(ApplyOutcome::Ignored),
        }
    }

    async fn delete_if_newer(
        &self,
        room_id: i64,
        event_id: Uuid,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome> {
        let mut rooms = self.rooms.lock().unwrap();

        match rooms.get(&room_id) {
            Some(current) if current.last_event_id < event_id => {
                rooms.remove(&room_id);
                Ok(ApplyOutcome::Applied)
            }
            _ => Ok(ApplyOutcome::Ignored),
        }
    }

    async fn delete_by_house(&self, house_id: i64, _tx: Option<&mut dyn Transaction>) -> Result<u64> {
        let mut rooms = self.rooms.lock().unwrap();
        let before = rooms.len();
        rooms.retain(|_, room| room.house_id != house_id);
        Ok((before - rooms.len()) as u64)
    }

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomReplica>> {
        Ok(self.rooms.lock().unwrap().get(&room_id).cloned())
    }

    async fn list_by_house(&self, house_id: i64) -> Result<Vec<RoomReplica>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.house_id == house_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoomSummaryRepository for InMemoryReplicaStore {
    async fn upsert(&self, summary: &RoomTemperatureSummary) -> Result<()> {
        self.summaries
            .lock()
            .unwrap()
            .insert(summary.room_id, summary.clone());
        Ok(())
    }

    async fn find_by_room(&self, room_id: i64) -> Result<Option<RoomTemperatureSummary>> {
        Ok(self.summaries.lock().unwrap().get(&room_id).cloned())
    }

    async fn delete_by_room(&self, room_id: i64, _tx: Option<&mut dyn Transaction>) -> Result<u64> {
        Ok(self.summaries.lock().unwrap().remove(&room_id).map(|_| 1).unwrap_or(0))
    }

    async fn delete_by_house(&self, house_id: i64, _tx: Option<&mut dyn Transaction>) -> Result<u64> {
        let mut summaries = self.summaries.lock().unwrap();
        let before = summaries.len();
        summaries.retain(|_, s| s.house_id != house_id);
        Ok((before - summaries.len()) as u64)
    }
}
