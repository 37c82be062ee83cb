// crates/house/src/infrastructure/postgres/rows/postgres_house_row.rs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::House;
use crate::domain::value_objects::{Address, HouseId, HouseName};

/// Struct privé à l'infrastructure pour le mapping SQLx
#[derive(FromRow)]
pub struct HouseRow {
    id: i64,
    name: String,
    address: Option<String>,
    version: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HouseRow> for House {
    fn from(row: HouseRow) -> Self {
        House::hydrate(
            HouseId::new(row.id),
            HouseName::from_raw(row.name),
            row.address.map(Address::from_raw),
            row.created_at,
            row.updated_at,
            row.version,
        )
    }
}
