// crates/house/src/application/update_room/update_room_command.rs

use crate::domain::value_objects::{RoomId, RoomName};

#[derive(Debug, Clone)]
pub struct UpdateRoomCommand {
    pub room_id: RoomId,
    pub name: RoomName,
}
