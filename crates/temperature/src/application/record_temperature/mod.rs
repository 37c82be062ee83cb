// crates/temperature/src/application/record_temperature/mod.rs

mod record_temperature_command;
mod record_temperature_use_case;

pub use record_temperature_command::RecordTemperatureCommand;
pub use record_temperature_use_case::RecordTemperatureUseCase;
