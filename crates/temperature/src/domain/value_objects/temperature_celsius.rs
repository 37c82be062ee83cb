// crates/temperature/src/domain/value_objects/temperature_celsius.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Température en degrés Celsius, bornée à une plage physiquement plausible
/// pour un capteur domestique.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemperatureCelsius(f64);

impl TemperatureCelsius {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 60.0;

    pub fn try_new(value: f64) -> Result<Self> {
        let temp = Self(value);
        temp.validate()?;
        Ok(temp)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl ValueObject for TemperatureCelsius {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() {
            return Err(DomainError::Validation {
                field: "celsius",
                reason: "Temperature must be a finite number".into(),
            });
        }

        if self.0 < Self::MIN || self.0 > Self::MAX {
            return Err(DomainError::Validation {
                field: "celsius",
                reason: format!("Temperature must be between {} and {} °C", Self::MIN, Self::MAX),
            });
        }

        Ok(())
    }
}
