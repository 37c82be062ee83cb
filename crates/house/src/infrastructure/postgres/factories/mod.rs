// crates/house/src/infrastructure/postgres/factories/mod.rs

mod postgres_context;

pub use postgres_context::PostgresContext;
