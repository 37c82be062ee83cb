// crates/house/src/infrastructure/postgres/mod.rs

pub mod factories;
pub mod repositories;
pub mod rows;
pub mod utils;

pub use factories::PostgresContext;
pub use repositories::{PostgresHouseRepository, PostgresRoomRepository};
