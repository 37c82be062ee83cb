// crates/temperature/src/infrastructure/postgres/repositories/postgres_room_summary_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;

use crate::domain::replica::RoomTemperatureSummary;
use crate::domain::repositories::RoomSummaryRepository;
use crate::infrastructure::postgres::rows::RoomSummaryRow;

pub struct PostgresRoomSummaryRepository {
    pool: PgPool,
}

impl PostgresRoomSummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomSummaryRepository for PostgresRoomSummaryRepository {
    async fn upsert(&self, summary: &RoomTemperatureSummary) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO room_temperature_summaries
                (room_id, house_id, last_value_celsius, min_value_celsius, max_value_celsius, sample_count, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (room_id) DO UPDATE
            SET last_value_celsius = EXCLUDED.last_value_celsius,
                min_value_celsius = EXCLUDED.min_value_celsius,
                max_value_celsius = EXCLUDED.max_value_celsius,
                sample_count = EXCLUDED.sample_count,
                updated_at = EXCLUDED.updated_at
            "#,
        )
            .bind(summary.room_id)
            .bind(summary.house_id)
            .bind(summary.last_value_celsius)
            .bind(summary.min_value_celsius)
            .bind(summary.max_value_celsius)
            .bind(summary.sample_count)
            .bind(summary.updated_at)
            .execute(&self.pool)
            .await
            .map_domain_infra("Failed to upsert room summary")?;

        Ok(())
    }

    async fn find_by_room(&self, room_id: i64) -> Result<Option<RoomTemperatureSummary>> {
        let row: Option<RoomSummaryRow> = sqlx::query_as(
            r#"
            SELECT room_id, house_id, last_value_celsius, min_value_celsius, max_value_celsius, sample_count, updated_at
            FROM room_temperature_summaries
            WHERE room_id = $1
            "#,
        )
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Failed to load room summary")?;

        Ok(row.map(RoomTemperatureSummary::from))
    }

    async fn delete_by_room(&self, room_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64> {
        <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query("DELETE FROM room_temperature_summaries WHERE room_id = $1")
                    .bind(room_id)
                    .execute(conn)
                    .await
                    .map_domain_infra("Failed to delete room summary")
                    .map(|r| r.rows_affected())
            })
        })
        .await
    }

    async fn delete_by_house(&self, house_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64> {
        <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query("DELETE FROM room_temperature_summaries WHERE house_id = $1")
                    .bind(house_id)
                    .execute(conn)
                    .await
                    .map_domain_infra("Failed to cascade room summaries")
                    .map(|r| r.rows_affected())
            })
        })
        .await
    }
}
