// crates/temperature/src/infrastructure/postgres/repositories/postgres_room_replica_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::replica::{ApplyOutcome, RoomReplica};
use crate::domain::repositories::RoomReplicaRepository;
use crate::infrastructure::postgres::rows::RoomReplicaRow;

pub struct PostgresRoomReplicaRepository {
    pool: PgPool,
}

impl PostgresRoomReplicaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomReplicaRepository for PostgresRoomReplicaRepository {
    async fn upsert_if_newer(&self, replica: &RoomReplica) -> Result<ApplyOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO room_replicas (room_id, house_id, name, last_event_id, last_synced_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (room_id) DO UPDATE
            SET house_id = EXCLUDED.house_id,
                name = EXCLUDED.name,
                last_event_id = EXCLUDED.last_event_id,
                last_synced_at = NOW()
            WHERE room_replicas.last_event_id < EXCLUDED.last_event_id
            "#,
        )
            .bind(replica.room_id)
            .bind(replica.house_id)
            .bind(&replica.name)
            .bind(replica.last_event_id)
            .execute(&self.pool)
            .await
            .map_domain_infra("Failed to upsert room replica")?;

        if result.rows_affected() == 1 {
            Ok(ApplyOutcome::Applied)
        } else {
            Ok(ApplyOutcome::Ignored)
        }
    }

    async fn delete_if_newer(
        &self,
        room_id: i64,
        event_id: Uuid,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<ApplyOutcome> {
        let affected = <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query("DELETE FROM room_replicas WHERE room_id = $1 AND last_event_id < $2")
                    .bind(room_id)
                    .bind(event_id)
                    .execute(conn)
                    .await
                    .map_domain_infra("Failed to delete room replica")
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

    async fn delete_by_house(&self, house_id: i64, tx: Option<&mut dyn Transaction>) -> Result<u64> {
        <dyn Transaction>::execute_on(&self.pool, tx, move |conn| {
            Box::pin(async move {
                sqlx::query("DELETE FROM room_replicas WHERE house_id = $1")
                    .bind(house_id)
                    .execute(conn)
                    .await
                    .map_domain_infra("Failed to cascade room replicas")
                    .map(|r| r.rows_affected())
            })
        })
        .await
    }

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomReplica>> {
        let row: Option<RoomReplicaRow> = sqlx::query_as(
            "SELECT room_id, house_id, name, last_event_id, last_synced_at FROM room_replicas WHERE room_id = $1",
        )
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("Failed to load room replica")?;

        Ok(row.map(RoomReplica::from))
    }

    async fn list_by_house(&self, house_id: i64) -> Result<Vec<RoomReplica>> {
        let rows: Vec<RoomReplicaRow> = sqlx::query_as(
            "SELECT room_id, house_id, name, last_event_id, last_synced_at FROM room_replicas WHERE house_id = $1 ORDER BY room_id",
        )
            .bind(house_id)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("Failed to list room replicas")?;

        Ok(rows.into_iter().map(RoomReplica::from).collect())
    }
}
