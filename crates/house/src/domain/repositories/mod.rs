// crates/house/src/domain/repositories/mod.rs

mod house_repository;
mod room_repository;

pub use house_repository::HouseRepository;
pub use room_repository::RoomRepository;
