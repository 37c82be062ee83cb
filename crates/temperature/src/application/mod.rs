// crates/temperature/src/application/mod.rs

pub mod apply_house_event;
pub mod apply_room_event;
pub mod record_temperature;
