// crates/temperature/src/infrastructure/postgres/repositories/postgres_house_replica_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::replica::{ApplyOutcome, HouseReplica};
use crate::domain::repositories::HouseReplicaRepository;
use crate::infrastructure::postgres::rows::HouseReplicaRow;

pub struct PostgresHouseReplicaRepository {
    pool: PgPool,
}

impl PostgresHouseReplicaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseReplicaRepository for PostgresHouseReplicaRepository {
    /// Upsert conditionnel en un seul statement : le WHERE du DO UPDATE est
    /// le compare-and-set sur `last_event_id`. Deux appliers concurrents sur
    /// la même clé ne peuvent pas se réordonner, le perdant compte 0 ligne.
    async fn upsert_if_newer(&self, replica: &HouseReplica) -> Result<ApplyOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO house_replicas (house_id, name, address, last_event_id, last_synced_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (house_id) DO UPDATE
            SET name = EXCLUDED.name,
                address = EXCLUDED.address,
                last_event_id = EXCLUDED.last_event_id,
                last_synced_at = NOW()
            WHERE house_replicas.last_event_id < EXCLUDED.last_event_id
            "#,
        )
            .bind(replica.house_id)
            .bind(&replica.name)
            .bind(&replica.address)
            .bind(replica.last_event_id)
            .execute(&self.pool)
            .await
            .map_domain_infra("Failed to upsert house replica")?;

        if result.rows_affected() == 1 {
            Ok(ApplyOutcome::Applied)
        } else {
            Ok(ApplyOutcome::Ignored)
        }
    }

    async fn delete_if_newer(
        &self,
        house_id: i64,
        event_id: Uuid,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome> {
        let affected = <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query(
                    "DELETE FROM house_replicas WHERE house_id = $1 AND last_event_id < $2",
                )
                    .bind(house_id)
                    .bind(event_id)
                    .execute(conn)
                    .await
                    .map_domain_infra("Failed to delete house replica")
                    .map(|r| r.rows_affected())
            })
        })
        .await?;

        if affected == 1 {
            Ok(ApplyOutcome::Applied)
        } else {
            Ok(ApplyOutcome::Ignored)
        }
    }

    async fn find_by_id(&self, house_id: i64) -> Result<Option<HouseReplica>> {
        let row: Option<HouseReplicaRow> = sqlx::query_as(
            "SELECT house_id, name, address, last_event_id, last_synced_at FROM house_replicas WHERE house_id = $1",
        )
            .bind(house_id)
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Failed to load house replica")?;

        Ok(row.map(HouseReplica::from))
    }

    async fn list_all(&self) -> Result<Vec<HouseReplica>> {
        let rows: Vec<HouseReplicaRow> = sqlx::query_as(
            "SELECT house_id, name, address, last_event_id, last_synced_at FROM house_replicas ORDER BY house_id",
        )
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("Failed to list house replicas")?;

        Ok(rows.into_iter().map(HouseReplica::from).collect())
    }

    async fn exists(&self, house_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM house_replicas WHERE house_id = $1)")
                .bind(house_id)
                .fetch_one(&self.pool)
                .await
                .map_domain_infra("Failed to check house replica existence")?;

        Ok(exists)
    }
}
