// crates/house/src/infrastructure/postgres/rows/mod.rs

mod postgres_house_row;
mod postgres_room_row;

pub use postgres_house_row::HouseRow;
pub use postgres_room_row::RoomRow;
