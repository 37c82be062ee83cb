// crates/house/src/application/delete_room/delete_room_command.rs

use crate::domain::value_objects::RoomId;

#[derive(Debug, Clone, Copy)]
pub struct DeleteRoomCommand {
    pub room_id: RoomId,
}
