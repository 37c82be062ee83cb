// crates/temperature/src/application/record_temperature/record_temperature_command.rs

use crate::domain::value_objects::TemperatureCelsius;

#[derive(Debug, Clone, Copy)]
pub struct RecordTemperatureCommand {
    pub room_id: i64,
    pub celsius: TemperatureCelsius,
}
