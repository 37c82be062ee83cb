// crates/house/src/infrastructure/postgres/factories/postgres_context.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::postgres::{PostgresOutboxRepository, PostgresTransactionManager};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::create_house::CreateHouseUseCase;
use crate::application::create_room::CreateRoomUseCase;
use crate::application::delete_house::DeleteHouseUseCase;
use crate::application::delete_room::DeleteRoomUseCase;
use crate::application::update_house::UpdateHouseUseCase;
use crate::application::update_room::UpdateRoomUseCase;
use crate::infrastructure::postgres::utils::run_postgres_migrations;
use crate::infrastructure::postgres::{PostgresHouseRepository, PostgresRoomRepository};

/// Racine de composition du service maison sur Postgres : pool, migrations,
/// repositories et use cases câblés. Le serveur d'API (hors de ce dépôt)
/// consomme ce contexte tel quel.
pub struct PostgresContext {
    pool: PgPool,
    houses: Arc<PostgresHouseRepository>,
    rooms: Arc<PostgresRoomRepository>,
    outbox: Arc<PostgresOutboxRepository>,
    tx_manager: Arc<PostgresTransactionManager>,
}

impl PostgresContext {
    pub async fn connect(db_url: &str) -> AppResult<Self> {
        let pool = PgPool::connect(db_url)
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        run_postgres_migrations(&pool).await?;

        Ok(Self {
            houses: Arc::new(PostgresHouseRepository::new(pool.clone())),
            rooms: Arc::new(PostgresRoomRepository::new(pool.clone())),
            outbox: Arc::new(PostgresOutboxRepository::new()),
            tx_manager: Arc::new(PostgresTransactionManager::new(pool.clone())),
            pool,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn create_house(&self) -> CreateHouseUseCase {
        CreateHouseUseCase::new(
            self.houses.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }

    pub fn update_house(&self) -> UpdateHouseUseCase {
        UpdateHouseUseCase::new(
            self.houses.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }

    pub fn delete_house(&self) -> DeleteHouseUseCase {
        DeleteHouseUseCase::new(
            self.houses.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }

    pub fn create_room(&self) -> CreateRoomUseCase {
        CreateRoomUseCase::new(
            self.rooms.clone(),
            self.houses.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }

    pub fn update_room(&self) -> UpdateRoomUseCase {
        UpdateRoomUseCase::new(
            self.rooms.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }

    pub fn delete_room(&self) -> DeleteRoomUseCase {
        DeleteRoomUseCase::new(
            self.rooms.clone(),
            self.outbox.clone(),
            self.tx_manager.clone(),
        )
    }
}
