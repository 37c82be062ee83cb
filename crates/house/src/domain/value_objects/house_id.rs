// crates/house/src/domain/value_objects/house_id.rs

use serde::{Deserialize, Serialize};

/// Clé d'une maison. La valeur est attribuée par la séquence de la base
/// autoritaire : le domaine ne fabrique jamais d'ID lui-même.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseId(i64);

impl HouseId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for HouseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for HouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
