// crates/shared-kernel/src/infrastructure/bootstrap/outbox.rs

use crate::application::workers::{OutboxProcessor, RetryPolicy};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::kafka::KafkaMessageProducer;
use crate::infrastructure::postgres::PostgresOutboxStore;
use sqlx::PgPool;
use std::env;
use std::time::Duration;

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Monte et fait tourner le relais outbox → Kafka d'un service.
/// Toute la configuration passe par l'environnement.
pub async fn run_outbox_relay(domain_name: &str, default_topic: &str) -> AppResult<()> {
    // 1. Initialisation des logs
    tracing_subscriber::fmt::init();
    tracing::info!("📡 Starting Outbox Relay for domain: {}", domain_name);

    // 2. Configuration via Environnement (avec valeurs par défaut)
    let db_url = env::var("DATABASE_URL")
        .map_err(|_| AppError::new(ErrorCode::InternalError, "DATABASE_URL must be set"))?;
    let brokers = env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".to_string());

    let batch_size: u32 = env_parse("OUTBOX_BATCH_SIZE", 100);
    let interval_ms: u64 = env_parse("OUTBOX_POLLING_MS", 500);
    let publish_timeout_ms: u64 = env_parse("OUTBOX_PUBLISH_TIMEOUT_MS", 5_000);
    let retry_policy = RetryPolicy {
        max_attempts: env_parse("OUTBOX_MAX_ATTEMPTS", 8),
        base_backoff_ms: env_parse("OUTBOX_BASE_BACKOFF_MS", 500),
        max_backoff_ms: env_parse("OUTBOX_MAX_BACKOFF_MS", 60_000),
    };

    // 3. Montage de l'infrastructure
    let pool = PgPool::connect(&db_url)
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

    let store = PostgresOutboxStore::new(pool);
    let producer = KafkaMessageProducer::new(&brokers, default_topic.to_string()).await?;

    let processor = OutboxProcessor::new(
        store,
        producer,
        batch_size,
        Duration::from_millis(interval_ms),
        Duration::from_millis(publish_timeout_ms),
        retry_policy,
    );

    // 4. Préparation du signal d'arrêt (Graceful Shutdown)
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("🛑 Shutdown signal received, stopping relay...");
                let _ = shutdown_tx.send(true);
            }
            Err(err) => {
                tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
            }
        }
    });

    tracing::info!(
        "✅ Processor configured: batch_size={}, interval={}ms, publish_timeout={}ms",
        batch_size,
        interval_ms,
        publish_timeout_ms
    );

    // 5. Exécution
    processor.run(shutdown_rx).await;

    tracing::info!("👋 Outbox relay for {} exited clean", domain_name);
    Ok(())
}
