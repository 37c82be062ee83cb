// crates/temperature/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};

/// Le worker est propriétaire des tables de réplique : il applique ses
/// migrations au démarrage, avant de consommer quoi que ce soit.
pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;
    Ok(())
}
