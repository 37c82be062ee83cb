// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use crate::application::ports::{ConsumeDecision, MessageConsumer, MessageHandler};
use crate::domain::events::EventEnvelope;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::Message;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::Offset;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Consommateur Kafka à commit manuel.
///
/// L'offset n'avance que sur décision du handler : `Ack` committe, `Retry`
/// repositionne la partition sur le message (relivraison après une pause),
/// `DeadLetter` route vers `<topic>.dlq` puis committe. Le traitement est
/// séquentiel par partition : avec la clé aggregate_id côté producteur, les
/// événements d'une même entité ne peuvent pas s'entrelacer.
pub struct KafkaMessageConsumer {
    client_config: ClientConfig,
    brokers: String,
    shutdown_token: CancellationToken,
    retry_pause: Duration,
}

impl KafkaMessageConsumer {
    pub fn new(brokers: &str, group_id: &str) -> Self {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "false") // le handler décide, pas l'horloge
            .set("auto.offset.reset", "earliest") // Ne rate rien au démarrage
            // Marges larges pour ne pas perdre la partition si l'apply est lent
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");

        Self {
            client_config: config,
            brokers: brokers.to_string(),
            shutdown_token: CancellationToken::new(),
            retry_pause: Duration::from_millis(500),
        }
    }

    pub fn stop(&self) {
        log::info!("Signaling Kafka consumer to stop...");
        self.shutdown_token.cancel();
    }

    async fn forward_to_dlq(
        &self,
        producer: &FutureProducer,
        dlq_topic: &str,
        key: &[u8],
        payload: &[u8],
    ) -> AppResult<()> {
        let record = FutureRecord::to(dlq_topic).key(key).payload(payload);

        producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(e, _)| AppError::from(e))?;

        log::warn!("💀 Message routed to dead-letter topic {}", dlq_topic);
        Ok(())
    }
}

#[async_trait]
impl MessageConsumer for KafkaMessageConsumer {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        let consumer: StreamConsumer = self.client_config.create()?;
        consumer
            .subscribe(&[topic])
            .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

        let dlq_topic = format!("{topic}.dlq");
        let dlq_producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &self.brokers)
            .create()?;

        while !self.shutdown_token.is_cancelled() {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = consumer.recv() => {
                    match result {
                        Ok(message) => {
                            let payload = match message.payload() {
                                Some(p) => p.to_vec(),
                                None => continue,
                            };

                            let decision = match serde_json::from_slice::<EventEnvelope>(&payload) {
                                Ok(envelope) => handler(envelope).await,
                                Err(e) => {
                                    log::error!("⚠️ Undecodable envelope, dead-lettering: {}", e);
                                    ConsumeDecision::DeadLetter
                                }
                            };

                            match decision {
                                ConsumeDecision::Ack => {
                                    consumer
                                        .commit_message(&message, CommitMode::Async)
                                        .map_err(AppError::from)?;
                                }
                                ConsumeDecision::Retry => {
                                    // On se repositionne sur le message pour le relire
                                    // au prochain poll, après une courte pause.
                                    consumer
                                        .seek(
                                            message.topic(),
                                            message.partition(),
                                            Offset::Offset(message.offset()),
                                            Duration::from_secs(5),
                                        )
                                        .map_err(AppError::from)?;
                                    tokio::time::sleep(self.retry_pause).await;
                                }
                                ConsumeDecision::DeadLetter => {
                                    let key = message.key().unwrap_or_default();
                                    self.forward_to_dlq(&dlq_producer, &dlq_topic, key, &payload).await?;
                                    consumer
                                        .commit_message(&message, CommitMode::Async)
                                        .map_err(AppError::from)?;
                                }
                            }
                        },
                        Err(e) => log::error!("Kafka receive error: {}", e),
                    }
                }
            }
        }
        log::info!("🛑 Kafka consumer loop stopped.");
        Ok(())
    }
}
