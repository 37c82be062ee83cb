// crates/house/src/domain/value_objects/house_name.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HouseName {
    inner: String,
}

impl HouseName {
    pub const MAX_LEN: usize = 120;

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let name = Self::from_raw(value.into().trim().to_string());
        name.validate()?;
        Ok(name)
    }

    /// Reconstruction rapide (Infrastructure / DB), sans re-validation
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl ValueObject for HouseName {
    fn validate(&self) -> Result<()> {
        if self.inner.is_empty() {
            return Err(DomainError::Validation {
                field: "name",
                reason: "House name cannot be empty".into(),
            });
        }

        if self.inner.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "name",
                reason: format!("House name cannot exceed {} characters", Self::MAX_LEN),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for HouseName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<HouseName> for String {
    fn from(name: HouseName) -> Self {
        name.inner
    }
}

impl std::fmt::Display for HouseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_name() {
        assert!(HouseName::try_new("   ").is_err());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = HouseName::try_new("  Villa  ").unwrap();
        assert_eq!(name.as_str(), "Villa");
    }

    #[test]
    fn test_rejects_oversized_name() {
        let long = "x".repeat(HouseName::MAX_LEN + 1);
        assert!(HouseName::try_new(long).is_err());
    }
}
