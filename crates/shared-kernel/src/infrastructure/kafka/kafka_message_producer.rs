// crates/shared-kernel/src/infrastructure/kafka/kafka_message_producer.rs

use crate::application::ports::MessageProducer;
use crate::domain::events::EventEnvelope;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::time::Duration;

pub struct KafkaMessageProducer {
    producer: FutureProducer,
    default_topic: String,
}

impl KafkaMessageProducer {
    pub async fn new(brokers: &str, default_topic: String) -> AppResult<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .set("compression.type", "snappy")  // Compromis CPU/Taille
            .set("acks", "all")                 // Pas d'ack partiel : l'outbox ne marque que du durable
            .set("queue.buffering.max.ms", "5")
            .set("batch.num.messages", "1000")
            .set("linger.ms", "10")
            .create()
            .map_err(|e| AppError::new(ErrorCode::InternalError, format!("Kafka config error: {e}")))?;

        Ok(Self { producer, default_topic })
    }
}

#[async_trait]
impl MessageProducer for KafkaMessageProducer {
    async fn publish(&self, event: &EventEnvelope) -> AppResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

        // Clé = aggregate_id : tous les événements d'une même entité
        // atterrissent sur la même partition.
        let record = FutureRecord::to(&self.default_topic)
            .payload(&payload)
            .key(&event.aggregate_id)
            .headers(OwnedHeaders::new()
                .insert(Header {
                    key: "event_type",
                    value: Some(&event.event_type), // ex: "house.created"
                })
            );

        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(e, _)| AppError::from(e))?;

        Ok(())
    }

    async fn publish_batch(&self, events: &[EventEnvelope]) -> AppResult<()> {
        // On pré-sérialise tout : les Strings doivent vivre
        // tant que les futures d'envoi tournent.
        let payloads: Vec<String> = events
            .iter()
            .map(|e| serde_json::to_string(e).unwrap_or_default())
            .collect();

        let mut futures = Vec::with_capacity(events.len());

        // Envoi vers le buffer interne de librdkafka
        for (i, event) in events.iter().enumerate() {
            let record = FutureRecord::to(&self.default_topic)
                .payload(&payloads[i])
                .key(&event.aggregate_id)
                .headers(OwnedHeaders::new()
                    .insert(Header {
                        key: "event_type",
                        value: Some(&event.event_type),
                    })
                );
            futures.push(self.producer.send(record, Duration::from_secs(0)));
        }

        // On attend les confirmations ; 'payloads' est toujours vivant ici.
        for future in futures {
            future.await.map_err(|(e, _)| AppError::from(e))?;
        }

        Ok(())
    }
}
