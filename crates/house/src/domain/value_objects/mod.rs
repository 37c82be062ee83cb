// crates/house/src/domain/value_objects/mod.rs

mod address;
mod house_id;
mod house_name;
mod room_id;
mod room_name;

pub use address::Address;
pub use house_id::HouseId;
pub use house_name::HouseName;
pub use room_id::RoomId;
pub use room_name::RoomName;
