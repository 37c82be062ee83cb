// crates/temperature/src/infrastructure/postgres/repositories/mod.rs

mod postgres_house_replica_repository;
mod postgres_room_replica_repository;
mod postgres_room_summary_repository;

pub use postgres_house_replica_repository::PostgresHouseReplicaRepository;
pub use postgres_room_replica_repository::PostgresRoomReplicaRepository;
pub use postgres_room_summary_repository::PostgresRoomSummaryRepository;
