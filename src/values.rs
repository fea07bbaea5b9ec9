//! Partial value set for a pet row. Absent fields are left untouched by an
//! update; insert requires the caller to have supplied the required ones.

use serde::{Deserialize, Serialize};

/// Proposed field values for an insert or update. Presence is modeled with
/// `Option` so partial updates are visible in the type. `gender` stays a raw
/// integer here: out-of-domain input must be representable so validation, not
/// construction, rejects it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PetValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl PetValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn gender(mut self, gender: i64) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// True when no field is present. An empty update is a no-op by contract.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.gender.is_none() && self.weight.is_none()
    }
}
