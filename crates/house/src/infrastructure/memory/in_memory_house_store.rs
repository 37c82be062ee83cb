// crates/house/src/infrastructure/memory/in_memory_house_store.rs

use async_trait::async_trait;
use chrono::Utc;
use shared_kernel::domain::events::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{House, Room};
use crate::domain::repositories::{HouseRepository, RoomRepository};
use crate::domain::value_objects::{Address, HouseId, HouseName, RoomId, RoomName};

/// Store autoritaire en mémoire (maisons + pièces), avec séquences d'IDs et
/// garde de version comme la vraie base. Sert aux tests de pipeline et au
/// développement local sans Postgres.
#[derive(Default)]
pub struct InMemoryHouseStore {
    houses: Mutex<BTreeMap<i64, House>>,
    rooms: Mutex<BTreeMap<i64, Room>>,
    house_seq: AtomicI64,
    room_seq: AtomicI64,
}

impl InMemoryHouseStore {
    pub fn new() -> Self {
        Self {
            houses: Mutex::new(BTreeMap::new()),
            rooms: Mutex::new(BTreeMap::new()),
            house_seq: AtomicI64::new(1),
            room_seq: AtomicI64::new(1),
        }
    }

    pub fn house_count(&self) -> usize {
        self.houses.lock().unwrap().len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.lock().unwrap().len()
    }
}

#[async_trait]
impl HouseRepository for InMemoryHouseStore {
    async fn insert(
        &self,
        name: &HouseName,
        address: Option<&Address>,
        _tx: &mut dyn Transaction,
    ) -> Result<House> {
        let id = self.house_seq.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let house = House::hydrate(HouseId::new(id), name.clone(), address.cloned(), now, now, 1);
        self.houses.lock().unwrap().insert(id, house.clone());
        Ok(house)
    }

    async fn find_by_id(&self, id: HouseId) -> Result<Option<House>> {
        Ok(self.houses.lock().unwrap().get(&id.as_i64()).cloned())
    }

    async fn save(&self, house: &House, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        let mut houses = self.houses.lock().unwrap();
        let current = houses.get_mut(&house.id.as_i64()).ok_or_else(|| {
            DomainError::NotFound { entity: "House", id: house.id.to_string() }
        })?;

        // Même sémantique que la garde SQL `WHERE version = $n`
        if current.version() != house.version() {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("House {} was modified concurrently", house.id),
            });
        }

        let mut updated = house.clone();
        updated.increment_version();
        *current = updated;
        Ok(())
    }

    async fn delete(&self, id: HouseId, _tx: &mut dyn Transaction) -> Result<()> {
        self.houses.lock().unwrap().remove(&id.as_i64());
        // FK ON DELETE CASCADE
        self.rooms
            .lock()
            .unwrap()
            .retain(|_, room| room.house_id != id);
        Ok(())
    }

    async fn exists_by_id(&self, id: HouseId) -> Result<bool> {
        Ok(self.houses.lock().unwrap().contains_key(&id.as_i64()))
    }

    async fn exists_by_name(&self, name: &HouseName) -> Result<bool> {
        Ok(self
            .houses
            .lock()
            .unwrap()
            .values()
            .any(|h| h.name == *name))
    }
}

#[async_trait]
impl RoomRepository for InMemoryHouseStore {
    async fn insert(
        &self,
        house_id: HouseId,
        name: &RoomName,
        _tx: &mut dyn Transaction,
    ) -> Result<Room> {
        if !self.houses.lock().unwrap().contains_key(&house_id.as_i64()) {
            return Err(DomainError::NotFound { entity: "House", id: house_id.to_string() });
        }

        let id = self.room_seq.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let room = Room::hydrate(RoomId::new(id), house_id, name.clone(), now, now, 1);
        self.rooms.lock().unwrap().insert(id, room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>> {
        Ok(self.rooms.lock().unwrap().get(&id.as_i64()).cloned())
    }

    async fn save(&self, room: &Room, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        let mut rooms = self.rooms.lock().unwrap();
        let current = rooms.get_mut(&room.id.as_i64()).ok_or_else(|| {
            DomainError::NotFound { entity: "Room", id: room.id.to_string() }
        })?;

        if current.version() != room.version() {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("Room {} was modified concurrently", room.id),
            });
        }

        let mut updated = room.clone();
        updated.increment_version();
        *current = updated;
        Ok(())
    }

    async fn delete(&self, id: RoomId, _tx: &mut dyn Transaction) -> Result<()> {
        self.rooms.lock().unwrap().remove(&id.as_i64());
        Ok(())
    }

    async fn list_by_house(&self, house_id: HouseId) -> Result<Vec<Room>> {
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
