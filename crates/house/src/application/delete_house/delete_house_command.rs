// crates/house/src/application/delete_house/delete_house_command.rs

use crate::domain::value_objects::HouseId;

#[derive(Debug, Clone, Copy)]
pub struct DeleteHouseCommand {
    pub house_id: HouseId,
}
