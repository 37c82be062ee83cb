// crates/temperature/src/domain/value_objects/mod.rs

mod temperature_celsius;

pub use temperature_celsius::TemperatureCelsius;
