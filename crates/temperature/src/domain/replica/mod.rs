// crates/temperature/src/domain/replica/mod.rs

mod apply_outcome;
mod house_replica;
mod room_replica;
mod room_summary;

pub use apply_outcome::ApplyOutcome;
pub use house_replica::HouseReplica;
pub use room_replica::RoomReplica;
pub use room_summary::RoomTemperatureSummary;
