// crates/temperature/src/infrastructure/kafka/mod.rs

mod house_event_consumer;

pub use house_event_consumer::HouseEventConsumer;
