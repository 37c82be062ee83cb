// crates/shared-kernel/src/domain/repositories/mod.rs

mod outbox_repository;
mod outbox_repository_stub;
mod outbox_store;

pub use outbox_repository::OutboxRepository;
pub use outbox_repository_stub::OutboxRepoStub;
pub use outbox_store::{OutboxStore, PendingEvent};
