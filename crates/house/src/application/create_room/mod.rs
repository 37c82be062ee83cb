// crates/house/src/application/create_room/mod.rs

mod create_room_command;
mod create_room_use_case;
#[cfg(test)]
mod create_room_use_case_test;

pub use create_room_command::CreateRoomCommand;
pub use create_room_use_case::CreateRoomUseCase;
