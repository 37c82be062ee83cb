// crates/house/src/application/delete_room/mod.rs

mod delete_room_command;
mod delete_room_use_case;

pub use delete_room_command::DeleteRoomCommand;
pub use delete_room_use_case::DeleteRoomUseCase;
