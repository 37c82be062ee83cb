// crates/shared-kernel/src/infrastructure/memory/mod.rs

mod in_memory_bus;
mod in_memory_outbox_store;

pub use in_memory_bus::InMemoryMessageBus;
pub use in_memory_outbox_store::{InMemoryOutboxStore, OutboxRowState};
