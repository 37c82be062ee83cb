// crates/temperature/src/domain/repositories/room_summary_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::replica::RoomTemperatureSummary;

#[async_trait]
pub trait RoomSummaryRepository: Send + Sync {
    async fn upsert(&self, summary: &RoomTemperatureSummary) -> Result<()>;

    async fn find_by_room(&self, room_id: i64) -> Result<Option<RoomTemperatureSummary>>;

    async fn delete_by_room(&self, room_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64>;

    async fn delete_by_house(&self, house_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64>;
}
