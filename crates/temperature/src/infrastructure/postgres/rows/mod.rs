// crates/temperature/src/infrastructure/postgres/rows/mod.rs

mod postgres_house_replica_row;
mod postgres_room_replica_row;
mod postgres_room_summary_row;

pub use postgres_house_replica_row::HouseReplicaRow;
pub use postgres_room_replica_row::RoomReplicaRow;
pub use postgres_room_summary_row::RoomSummaryRow;
