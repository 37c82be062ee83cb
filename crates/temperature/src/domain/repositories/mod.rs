// crates/temperature/src/domain/repositories/mod.rs

mod house_replica_repository;
mod room_replica_repository;
mod room_summary_repository;

pub use house_replica_repository::HouseReplicaRepository;
pub use room_replica_repository::RoomReplicaRepository;
pub use room_summary_repository::RoomSummaryRepository;
