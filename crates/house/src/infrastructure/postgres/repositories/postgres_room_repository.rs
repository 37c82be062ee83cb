// crates/house/src/infrastructure/postgres/repositories/postgres_room_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::{SqlxErrorExt, TransactionExt};
use sqlx::PgPool;

use crate::domain::entities::Room;
use crate::domain::repositories::RoomRepository;
use crate::domain::value_objects::{HouseId, RoomId, RoomName};
use crate::infrastructure::postgres::rows::RoomRow;

pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn insert(
        &self,
        house_id: HouseId,
        name: &RoomName,
        tx: &mut dyn Transaction,
    ) -> Result<Room> {
        let sqlx_tx = tx.downcast_mut_sqlx()?;

        // La FK couvre la course avec un delete_house concurrent : la
        // violation 23503 ressort en NotFound via le mapper.
        let row: RoomRow = sqlx::query_as(
            r#"
            INSERT INTO rooms (house_id, name)
            VALUES ($1, $2)
            RETURNING id, house_id, name, version, created_at, updated_at
            "#,
        )
            .bind(house_id.as_i64())
            .bind(name.as_str())
            .fetch_one(&mut **sqlx_tx)
            .await
            .map_domain::<Room>()?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            "SELECT id, house_id, name, version, created_at, updated_at FROM rooms WHERE id = $1",
        )
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Failed to load room")?;

        Ok(row.map(Room::from))
    }

    async fn save(&self, room: &Room, tx: Option<&mut dyn Transaction>) -> Result<()> {
        use shared_kernel::domain::events::AggregateRoot;

        let id = room.id.as_i64();
        let name = room.name.as_str().to_string();
        let updated_at = room.updated_at;
        let version = room.version();

        let affected = <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query(
                    r#"
                    UPDATE rooms
                    SET name = $2, updated_at = $3, version = version + 1
                    WHERE id = $1 AND version = $4
                    "#,
                )
                    .bind(id)
                    .bind(name)
                    .bind(updated_at)
                    .bind(version)
                    .execute(conn)
                    .await
                    .map_domain::<Room>()
                    .map(|r| r.rows_affected())
            })
        })
        .await?;

        if affected == 0 {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!("Room {} was modified concurrently", room.id),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: RoomId, tx: &mut dyn Transaction) -> Result<()> {
        let sqlx_tx = tx.downcast_mut_sqlx()?;

        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut **sqlx_tx)
            .await
            .map_domain_infra("Failed to delete room")?;

        Ok(())
    }

    async fn list_by_house(&self, house_id: HouseId) -> Result<Vec<Room>> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            "SELECT id, house_id, name, version, created_at, updated_at FROM rooms WHERE house_id = $1 ORDER BY id",
        )
            .bind(house_id.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("Failed to list rooms")?;

        Ok(rows.into_iter().map(Room::from).collect())
    }
}
