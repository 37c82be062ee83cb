// crates/house/src/infrastructure/postgres/repositories/postgres_house_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::{SqlxErrorExt, TransactionExt};
use sqlx::PgPool;

use crate::domain::entities::House;
use crate::domain::repositories::HouseRepository;
use crate::domain::value_objects::{Address, HouseId, HouseName};
use crate::infrastructure::postgres::rows::HouseRow;

pub struct PostgresHouseRepository {
    pool: PgPool,
}

impl PostgresHouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseRepository for PostgresHouseRepository {
    async fn insert(
        &self,
        name: &HouseName,
        address: Option<&Address>,
        tx: &mut dyn Transaction,
    ) -> Result<House> {
        let sqlx_tx = tx.downcast_mut_sqlx()?;

        let row: HouseRow = sqlx::query_as(
            r#"
            INSERT INTO houses (name, address)
            VALUES ($1, $2)
            RETURNING id, name, address, version, created_at, updated_at
            "#,
        )
            .bind(name.as_str())
            .bind(address.map(|a| a.as_str()))
            .fetch_one(&mut **sqlx_tx)
            .await
            .map_domain::<House>()?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: HouseId) -> Result<Option<House>> {
        let row: Option<HouseRow> = sqlx::query_as(
            "SELECT id, name, address, version, created_at, updated_at FROM houses WHERE id = $1",
        )
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Failed to load house")?;

        Ok(row.map(House::from))
    }

    /// Update versionné : la garde `version = $n` transforme toute écriture
    /// concurrente perdue en ConcurrencyConflict (retryé par le use case).
    async fn save(&self, house: &House, tx: Option<&mut dyn Transaction>) -> Result<()> {
        use shared_kernel::domain::events::AggregateRoot;

        let id = house.id.as_i64();
        let name = house.name.as_str().to_string();
        let address = house.address.as_ref().map(|a| a.as_str().to_string());
        let updated_at = house.updated_at;
        let version = house.version();

        let affected = <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query(
                    r#"
                    UPDATE houses
                    SET name = $2, address = $3, updated_at = $4, version = version + 1
                    WHERE id = $1 AND version = $5
                    "#,
                )
                    .bind(id)
                    .bind(name)
                    .bind(address)
                    .bind(updated_at)
                    .bind(version)
                    .execute(conn)
                    .await
                    .map_domain::<House>()
                    .map(|r| r.rows_affected())
            })
        })
        .await?;

        if affected == 0 {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("House {} was modified concurrently", house.id),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: HouseId, tx: &mut dyn Transaction) -> Result<()> {
        let sqlx_tx = tx.downcast_mut_sqlx()?;

        // Les pièces suivent via la FK ON DELETE CASCADE
        sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut **sqlx_tx)
            .await
            .map_domain_infra("Failed to delete house")?;

        Ok(())
    }

    async fn exists_by_id(&self, id: HouseId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM houses WHERE id = $1)")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("Failed to check house existence")?;

        Ok(exists)
    }

    async fn exists_by_name(&self, name: &HouseName) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM houses WHERE name = $1)")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("Failed to check house name")?;

        Ok(exists)
    }
}
