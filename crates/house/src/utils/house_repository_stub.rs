// crates/house/src/utils/house_repository_stub.rs
#![cfg(test)]

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{House, Room};
use crate::domain::repositories::{HouseRepository, RoomRepository};
use crate::domain::value_objects::{Address, HouseId, HouseName, RoomId, RoomName};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

// --- STUB HOUSE REPOSITORY ---
pub struct HouseRepositoryStub {
    pub house_to_return: Mutex<Option<House>>,
    pub exists_id_return: Mutex<bool>,
    pub exists_name_return: Mutex<bool>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre de saves qui échoueront en ConcurrencyConflict avant de passer
    pub save_conflicts_remaining: Mutex<u32>,
    pub deleted: Mutex<Vec<HouseId>>,
    pub next_id: AtomicI64,
}

impl Default for HouseRepositoryStub {
    fn default() -> Self {
        Self {
            house_to_return: Mutex::new(None),
            exists_id_return: Mutex::new(true),
            exists_name_return: Mutex::new(false),
            error_to_return: Mutex::new(None),
            save_conflicts_remaining: Mutex::new(0),
            deleted: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait::async_trait]
impl HouseRepository for HouseRepositoryStub {
    async fn insert(
        &self,
        name: &HouseName,
        address: Option<&Address>,
        _tx: &mut dyn Transaction,
    ) -> Result<House> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let now = Utc::now();
        Ok(House::hydrate(
            HouseId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name.clone(),
            address.cloned(),
            now,
            now,
            1,
        ))
    }

    async fn find_by_id(&self, _id: HouseId) -> Result<Option<House>> {
        Ok(self.house_to_return.lock().unwrap().clone())
    }

    async fn save(&self, _house: &House, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        {
            let mut conflicts = self.save_conflicts_remaining.lock().unwrap();
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(DomainError::ConcurrencyConflict {
                    reason: "version mismatch".into(),
                });
            }
        }
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, id: HouseId, _tx: &mut dyn Transaction) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn exists_by_id(&self, _id: HouseId) -> Result<bool> {
        Ok(*self.exists_id_return.lock().unwrap())
    }

    async fn exists_by_name(&self, _name: &HouseName) -> Result<bool> {
        Ok(*self.exists_name_return.lock().unwrap())
    }
}

// --- STUB ROOM REPOSITORY ---
pub struct RoomRepositoryStub {
    pub room_to_return: Mutex<Option<Room>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub deleted: Mutex<Vec<RoomId>>,
    pub next_id: AtomicI64,
}

impl Default for RoomRepositoryStub {
    fn default() -> Self {
        Self {
            room_to_return: Mutex::new(None),
            error_to_return: Mutex::new(None),
            deleted: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait::async_trait]
impl RoomRepository for RoomRepositoryStub {
    async fn insert(
        &self,
        house_id: HouseId,
        name: &RoomName,
        _tx: &mut dyn Transaction,
    ) -> Result<Room> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let now = Utc::now();
        Ok(Room::hydrate(
            RoomId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            house_id,
            name.clone(),
            now,
            now,
            1,
        ))
    }

    async fn find_by_id(&self, _id: RoomId) -> Result<Option<Room>> {
        Ok(self.room_to_return.lock().unwrap().clone())
    }

    async fn save(&self, _room: &Room, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, id: RoomId, _tx: &mut dyn Transaction) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn list_by_house(&self, _house_id: HouseId) -> Result<Vec<Room>> {
        Ok(Vec::new())
    }
}
