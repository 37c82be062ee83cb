// crates/temperature/src/application/apply_room_event/mod.rs

mod apply_room_event_command;
mod apply_room_event_use_case;
#[cfg(test)]
mod apply_room_event_use_case_test;

pub use apply_room_event_command::{ApplyRoomEventCommand, RoomChange};
pub use apply_room_event_use_case::ApplyRoomEventUseCase;
