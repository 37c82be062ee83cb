// crates/temperature/src/domain/replica/room_summary.rs

use chrono::{DateTime, Utc};

/// Agrégat de lecture des températures d'une pièce. Dépend de la réplique
/// (il référence room_id/house_id) : la cascade de suppression d'une maison
/// ou d'une pièce l'emporte avec elle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTemperatureSummary {
    pub room_id: i64,
    pub house_id: i64,
    pub last_value_celsius: f64,
    pub min_value_celsius: f64,
    pub max_value_celsius: f64,
    pub sample_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl RoomTemperatureSummary {
    pub fn first_sample(room_id: i64, house_id: i64, celsius: f64) -> Self {
        Self {
            room_id,
            house_id,
            last_value_celsius: celsius,
            min_value_celsius: celsius,
            max_value_celsius: celsius,
            sample_count: 1,
            updated_at: Utc::now(),
        }
    }

    pub fn record(&mut self, celsius: f64) {
        self.last_value_celsius = celsius;
        self.min_value_celsius = self.min_value_celsius.min(celsius);
        self.max_value_celsius = self.max_value_celsius.max(celsius);
        self.sample_count += 1;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_min_max_and_count() {
        let mut summary = RoomTemperatureSummary::first_sample(1, 1, 20.0);
        summary.record(18.5);
        summary.record(23.0);

        assert_eq!(summary.last_value_celsius, 23.0);
        assert_eq!(summary.min_value_celsius, 18.5);
        assert_eq!(summary.max_value_celsius, 23.0);
        assert_eq!(summary.sample_count, 3);
    }
}
