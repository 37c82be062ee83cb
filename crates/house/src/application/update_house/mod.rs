// crates/house/src/application/update_house/mod.rs

mod update_house_command;
mod update_house_use_case;
#[cfg(test)]
mod update_house_use_case_test;

pub use update_house_command::UpdateHouseCommand;
pub use update_house_use_case::UpdateHouseUseCase;
