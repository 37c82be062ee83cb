// crates/house/src/application/create_room/create_room_command.rs

use crate::domain::value_objects::{HouseId, RoomName};

#[derive(Debug, Clone)]
pub struct CreateRoomCommand {
    pub house_id: HouseId,
    pub name: RoomName,
}
