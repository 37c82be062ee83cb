// crates/house/src/domain/repositories/house_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::House;
use crate::domain::value_objects::{Address, HouseId, HouseName};

#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// Insère une nouvelle maison et retourne l'agrégat avec l'ID attribué
    /// par la séquence. Toujours dans la transaction de la mutation.
    async fn insert(
        &self,
        name: &HouseName,
        address: Option<&Address>,
        tx: &mut dyn Transaction,
    ) -> Result<House>;

    async fn find_by_id(&self, id: HouseId) -> Result<Option<House>>;

    /// Sauvegarde avec garde de version (Optimistic Concurrency Control) :
    /// échoue en ConcurrencyConflict si la version en base a bougé.
    async fn save(&self, house: &House, tx: Option<&mut dyn Transaction>) -> Result<()>;

    async fn delete(&self, id: HouseId, tx: &mut dyn Transaction) -> Result<()>;

    async fn exists_by_id(&self, id: HouseId) -> Result<bool>;

    async fn exists_by_name(&self, name: &HouseName) -> Result<bool>;
}
