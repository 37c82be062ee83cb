// crates/house/src/infrastructure/postgres/repositories/mod.rs

mod postgres_house_repository;
mod postgres_room_repository;

pub use postgres_house_repository::PostgresHouseRepository;
pub use postgres_room_repository::PostgresRoomRepository;
