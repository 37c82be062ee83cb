// crates/house/src/application/create_house/create_house_command.rs

use crate::domain::value_objects::{Address, HouseName};

#[derive(Debug, Clone)]
pub struct CreateHouseCommand {
    pub name: HouseName,
    pub address: Option<Address>,
}
