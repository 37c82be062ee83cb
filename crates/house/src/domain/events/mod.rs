// crates/house/src/domain/events/mod.rs

mod house_events;
mod room_events;

pub use house_events::HouseEvent;
pub use room_events::RoomEvent;
