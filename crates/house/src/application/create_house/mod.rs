// crates/house/src/application/create_house/mod.rs

mod create_house_command;
mod create_house_use_case;
#[cfg(test)]
mod create_house_use_case_test;

pub use create_house_command::CreateHouseCommand;
pub use create_house_use_case::CreateHouseUseCase;
