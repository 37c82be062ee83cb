// crates/temperature/src/application/apply_house_event/mod.rs

mod apply_house_event_command;
mod apply_house_event_use_case;
#[cfg(test)]
mod apply_house_event_use_case_test;

pub use apply_house_event_command::{ApplyHouseEventCommand, HouseChange};
pub use apply_house_event_use_case::ApplyHouseEventUseCase;
