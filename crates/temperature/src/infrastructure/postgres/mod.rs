// crates/temperature/src/infrastructure/postgres/mod.rs

pub mod repositories;
pub mod rows;
pub mod utils;

pub use repositories::{
    PostgresHouseReplicaRepository, PostgresRoomReplicaRepository, PostgresRoomSummaryRepository,
};
