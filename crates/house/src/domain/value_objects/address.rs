// crates/house/src/domain/value_objects/address.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Adresse postale libre, optionnelle au niveau de la maison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    inner: String,
}

impl Address {
    pub const MAX_LEN: usize = 200;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let address = Self::from_raw(value.into().trim().to_string());
        address.validate()?;
        Ok(address)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl ValueObject for Address {
    fn validate(&self) -> Result<()> {
        if self.inner.is_empty() {
            return Err(DomainError::Validation {
                field: "address",
                reason: "Address cannot be empty".into(),
            });
        }

        if self.inner.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "address",
                reason: format!("Address cannot exceed {} characters", Self::MAX_LEN),
            });
        }

        Ok(())
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.inner
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
