// crates/house/src/application/update_house/update_house_command.rs

use crate::domain::value_objects::{Address, HouseId, HouseName};

#[derive(Debug, Clone)]
pub struct UpdateHouseCommand {
    pub house_id: HouseId,
    pub name: HouseName,
    pub address: Option<Address>,
}
