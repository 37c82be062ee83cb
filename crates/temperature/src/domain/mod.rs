// crates/temperature/src/domain/mod.rs

pub mod replica;
pub mod repositories;
pub mod value_objects;
