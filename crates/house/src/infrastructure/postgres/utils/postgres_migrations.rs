// crates/house/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};

pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;
    Ok(())
}
