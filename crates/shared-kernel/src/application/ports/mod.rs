// crates/shared-kernel/src/application/ports/mod.rs

mod message_consumer;
mod message_producer;

pub use message_consumer::{ConsumeDecision, MessageConsumer, MessageHandler};
pub use message_producer::MessageProducer;
