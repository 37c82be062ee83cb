// crates/shared-kernel/src/application/workers/mod.rs

mod outbox_processor;
#[cfg(test)]
mod outbox_processor_test;

pub use outbox_processor::{OutboxProcessor, RetryPolicy};
