// crates/temperature/src/infrastructure/kafka/house_event_consumer.rs

use serde::Deserialize;
use shared_kernel::application::ports::{ConsumeDecision, MessageHandler};
use shared_kernel::domain::events::EventEnvelope;
use shared_kernel::errors::DomainError;
use std::sync::Arc;

use crate::application::apply_house_event::{
    ApplyHouseEventCommand, ApplyHouseEventUseCase, HouseChange,
};
use crate::application::apply_room_event::{
    ApplyRoomEventCommand, ApplyRoomEventUseCase, RoomChange,
};
use crate::domain::replica::ApplyOutcome;

/// Le contrat local : on ne décrit que les événements qui nous intéressent.
/// Une seule table de dispatch tag → handler, pas de classe par événement.
#[derive(Deserialize)]
#[serde(tag = "type", content = "data")]
enum HouseIncomingEvent {
    HouseCreated {
        house_id: i64,
        name: String,
        address: Option<String>,
    },
    HouseUpdated {
        house_id: i64,
        name: String,
        address: Option<String>,
    },
    HouseDeleted {
        house_id: i64,
    },
    RoomCreated {
        room_id: i64,
        house_id: i64,
        name: String,
    },
    RoomUpdated {
        room_id: i64,
        house_id: i64,
        name: String,
    },
    RoomDeleted {
        room_id: i64,
        house_id: i64,
    },
    // Capture les événements inconnus pour ne pas planter sur un type futur
    #[serde(other)]
    Ignored,
}

/// Adaptateur bus → use cases d'application de réplique.
///
/// C'est lui qui traduit les erreurs du domaine en verdict de consommation :
/// - doublon/stale         → Ack (no-op de l'idempotence)
/// - parent pas encore là  → Retry (relivraison, jamais de drop)
/// - payload malformé      → DeadLetter (jamais retenté en boucle)
/// - panne locale          → Retry
pub struct HouseEventConsumer {
    apply_house: Arc<ApplyHouseEventUseCase>,
    apply_room: Arc<ApplyRoomEventUseCase>,
}

impl HouseEventConsumer {
    pub fn new(
        apply_house: Arc<ApplyHouseEventUseCase>,
        apply_room: Arc<ApplyRoomEventUseCase>,
    ) -> Self {
        Self { apply_house, apply_room }
    }

    pub async fn handle(&self, envelope: EventEnvelope) -> ConsumeDecision {
        let event: HouseIncomingEvent = match serde_json::from_value(envelope.payload.clone()) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(
                    "Undecodable payload for event {} ({}): {}",
                    envelope.id,
                    envelope.event_type,
                    e
                );
                return ConsumeDecision::DeadLetter;
            }
        };

        let result = match event {
            HouseIncomingEvent::HouseCreated { house_id, name, address } => {
                self.apply_house
                    .execute(ApplyHouseEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: HouseChange::Created { house_id, name, address },
                    })
                    .await
            }
            HouseIncomingEvent::HouseUpdated { house_id, name, address } => {
                self.apply_house
                    .execute(ApplyHouseEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: HouseChange::Updated { house_id, name, address },
                    })
                    .await
            }
            HouseIncomingEvent::HouseDeleted { house_id } => {
                self.apply_house
                    .execute(ApplyHouseEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: HouseChange::Deleted { house_id },
                    })
                    .await
            }
            HouseIncomingEvent::RoomCreated { room_id, house_id, name } => {
                self.apply_room
                    .execute(ApplyRoomEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: RoomChange::Created { room_id, house_id, name },
                    })
                    .await
            }
            HouseIncomingEvent::RoomUpdated { room_id, house_id, name } => {
                self.apply_room
                    .execute(ApplyRoomEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: RoomChange::Updated { room_id, house_id, name },
                    })
                    .await
            }
            HouseIncomingEvent::RoomDeleted { room_id, house_id } => {
                self.apply_room
                    .execute(ApplyRoomEventCommand {
                        event_id: envelope.id,
                        occurred_at: envelope.occurred_at,
                        change: RoomChange::Deleted { room_id, house_id },
                    })
                    .await
            }
            HouseIncomingEvent::Ignored => return ConsumeDecision::Ack,
        };

        match result {
            Ok(ApplyOutcome::Applied) => ConsumeDecision::Ack,
            Ok(ApplyOutcome::Ignored) => {
                tracing::debug!("Duplicate or stale event {} discarded", envelope.id);
                ConsumeDecision::Ack
            }
            Err(DomainError::Validation { field, reason }) => {
                tracing::error!(
                    "Poison event {} rejected ({}: {}), dead-lettering",
                    envelope.id,
                    field,
                    reason
                );
                ConsumeDecision::DeadLetter
            }
            Err(DomainError::NotFound { entity, id }) => {
                tracing::warn!(
                    "Event {} waits for missing {} {}, requesting redelivery",
                    envelope.id,
                    entity,
                    id
                );
                ConsumeDecision::Retry
            }
            Err(e) => {
                tracing::error!("Transient failure applying event {}: {}", envelope.id, e);
                ConsumeDecision::Retry
            }
        }
    }

    /// Emballe le consumer en handler prêt à brancher sur un MessageConsumer.
    pub fn into_handler(self: Arc<Self>) -> MessageHandler {
        Box::new(move |envelope| {
            let consumer = Arc::clone(&self);
            Box::pin(async move { consumer.handle(envelope).await })
        })
    }
}
