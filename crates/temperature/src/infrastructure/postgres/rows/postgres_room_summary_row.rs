// crates/temperature/src/infrastructure/postgres/rows/postgres_room_summary_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::replica::RoomTemperatureSummary;

#[derive(FromRow)]
pub struct RoomSummaryRow {
    room_id: i64,
    house_id: i64,
    last_value_celsius: f64,
    min_value_celsius: f64,
    max_value_celsius: f64,
    sample_count: i64,
    updated_at: DateTime<Utc>,
}

impl From<RoomSummaryRow> for RoomTemperatureSummary {
    fn from(row: RoomSummaryRow) -> Self {
        Self {
            room_id: row.room_id,
            house_id: row.house_id,
            last_value_celsius: row.last_value_celsius,
            min_value_celsius: row.min_value_celsius,
            max_value_celsius: row.max_value_celsius,
            sample_count: row.sample_count,
            updated_at: row.updated_at,
        }
    }
}
