// crates/temperature/src/infrastructure/bootstrap.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::kafka::KafkaMessageConsumer;
use shared_kernel::infrastructure::postgres::PostgresTransactionManager;
use sqlx::PgPool;
use std::env;
use std::sync::Arc;

use crate::application::apply_house_event::ApplyHouseEventUseCase;
use crate::application::apply_room_event::ApplyRoomEventUseCase;
use crate::infrastructure::kafka::HouseEventConsumer;
use crate::infrastructure::postgres::utils::run_postgres_migrations;
use crate::infrastructure::postgres::{
    PostgresHouseReplicaRepository, PostgresRoomReplicaRepository, PostgresRoomSummaryRepository,
};
use shared_kernel::application::ports::MessageConsumer;

/// Monte et fait tourner le worker de réplication maison → température.
pub async fn run_house_replicator(topic: &str, group_id: &str) -> AppResult<()> {
    // 1. Logs
    tracing_subscriber::fmt::init();
    tracing::info!("📥 Starting house replicator (topic: {}, group: {})", topic, group_id);

    // 2. Configuration via Environnement
    let db_url = env::var("DATABASE_URL")
        .map_err(|_| AppError::new(ErrorCode::InternalError, "DATABASE_URL must be set"))?;
    let brokers = env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".to_string());

    // 3. Stockage local : pool + migrations (le worker possède ses tables)
    let pool = PgPool::connect(&db_url)
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;
    run_postgres_migrations(&pool).await?;

    // 4. Montage des use cases d'application de réplique
    let houses = Arc::new(PostgresHouseReplicaRepository::new(pool.clone()));
    let rooms = Arc::new(PostgresRoomReplicaRepository::new(pool.clone()));
    let summaries = Arc::new(PostgresRoomSummaryRepository::new(pool.clone()));
    let tx_manager = Arc::new(PostgresTransactionManager::new(pool));

    let apply_house = Arc::new(ApplyHouseEventUseCase::new(
        houses.clone(),
        rooms.clone(),
        summaries.clone(),
        tx_manager.clone(),
    ));
    let apply_room = Arc::new(ApplyRoomEventUseCase::new(houses, rooms, summaries, tx_manager));

    let handler = Arc::new(HouseEventConsumer::new(apply_house, apply_room)).into_handler();

    // 5. Consommateur Kafka + arrêt propre
    let consumer = Arc::new(KafkaMessageConsumer::new(&brokers, group_id));

    let stopper = Arc::clone(&consumer);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("🛑 Shutdown signal received, stopping replicator...");
                stopper.stop();
            }
            Err(err) => {
                tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
            }
        }
    });

    // 6. Boucle de consommation (commit piloté par les décisions du handler)
    consumer.consume(topic, handler).await?;

    tracing::info!("👋 House replicator exited clean");
    Ok(())
}
