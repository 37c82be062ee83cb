// crates/shared-kernel/src/infrastructure/bootstrap/mod.rs

mod outbox;

pub use outbox::run_outbox_relay;
