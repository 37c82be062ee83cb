// crates/house/src/application/delete_house/mod.rs

mod delete_house_command;
mod delete_house_use_case;
#[cfg(test)]
mod delete_house_use_case_test;

pub use delete_house_command::DeleteHouseCommand;
pub use delete_house_use_case::DeleteHouseUseCase;
