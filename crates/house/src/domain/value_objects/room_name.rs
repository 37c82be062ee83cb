// crates/house/src/domain/value_objects/room_name.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomName {
    inner: String,
}

impl RoomName {
    pub const MAX_LEN: usize = 80;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let name = Self::from_raw(value.into().trim().to_string());
        name.validate()?;
        Ok(name)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl ValueObject for RoomName {
    fn validate(&self) -> Result<()> {
        if self.inner.is_empty() {
            return Err(DomainError::Validation {
                field: "name",
                reason: "Room name cannot be empty".into(),
            });
        }

        if self.inner.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "name",
                reason: format!("Room name cannot exceed {} characters", Self::MAX_LEN),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for RoomName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<RoomName> for String {
    fn from(name: RoomName) -> Self {
        name.inner
    }
}

impl std::fmt::Display for RoomName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
