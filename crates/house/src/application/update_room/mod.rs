// crates/house/src/application/update_room/mod.rs

mod update_room_command;
mod update_room_use_case;
#[cfg(test)]
mod update_room_use_case_test;

pub use update_room_command::UpdateRoomCommand;
pub use update_room_use_case::UpdateRoomUseCase;
