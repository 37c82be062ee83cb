// crates/shared-kernel/src/domain/events/event.rs

use dyn_clone::DynClone;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Debug;
use uuid::Uuid;

/// Fait métier émis par un agrégat et destiné à la table outbox.
///
/// L'identifiant d'événement est un UUID v7 : ordonné dans le temps, il sert
/// de clé d'ordre côté producteur et de jeton d'idempotence côté réplique
/// ("strictement plus récent que le dernier appliqué").
pub trait DomainEvent: DynClone + Debug + Send + Sync {
    /// Identifiant unique de l'événement (pour l'idempotence)
    fn event_id(&self) -> Uuid;

    /// Nom de l'événement (ex: "house.created")
    fn event_type(&self) -> Cow<'_, str>;

    /// Nom de l'agrégat (ex: "house")
    fn aggregate_type(&self) -> Cow<'_, str>;

    /// ID de l'agrégat (le périmètre d'ordre par entité)
    fn aggregate_id(&self) -> String;

    /// Horodatage (quand c'est arrivé)
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Les données réelles en JSON
    fn payload(&self) -> Value;

    /// ID de corrélation pour le traçage distribué
    fn correlation_id(&self) -> Option<Uuid> {
        None
    }
}

dyn_clone::clone_trait_object!(DomainEvent);
