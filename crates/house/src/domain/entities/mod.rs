// crates/house/src/domain/entities/mod.rs

mod house;
mod room;

pub use house::House;
pub use room::Room;
