// crates/house/src/domain/repositories/room_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::Room;
use crate::domain::value_objects::{HouseId, RoomId, RoomName};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn insert(
        &self,
        house_id: HouseId,
        name: &RoomName,
        tx: &mut dyn Transaction,
    ) -> Result<Room>;

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>>;

    async fn save(&self, room: &Room, tx: Option<&mut dyn Transaction>) -> Result<()>;

    async fn delete(&self, id: RoomId, tx: &mut dyn Transaction) -> Result<()>;

    async fn list_by_house(&self, house_id: HouseId) -> Result<Vec<Room>>;
}
