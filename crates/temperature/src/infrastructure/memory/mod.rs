// crates/temperature/src/infrastructure/memory/mod.rs

mod in_memory_replica_store;

pub use in_memory_replica_store::InMemoryReplicaStore;
