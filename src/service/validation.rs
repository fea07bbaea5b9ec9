//! Field validation against the contract's domain rules.

use crate::contract::{self, Gender};
use crate::error::ProviderError;
use crate::values::PetValues;

pub struct PetValidator;

impl PetValidator {
    /// Validate an insert: name and gender must be present, then every
    /// present field is checked with the same rules as a partial update.
    pub fn validate_insert(values: &PetValues) -> Result<(), ProviderError> {
        if values.name.is_none() {
            return Err(ProviderError::validation(
                contract::COLUMN_NAME,
                "pet requires a name",
            ));
        }
        if values.gender.is_none() {
            return Err(ProviderError::validation(
                contract::COLUMN_GENDER,
                "pet requires valid gender",
            ));
        }
        Self::validate_present(values)
    }

    /// Validate only the fields present in the value set (partial updates).
    /// Absent fields are not required.
    pub fn validate_present(values: &PetValues) -> Result<(), ProviderError> {
        if let Some(gender) = values.gender {
            if Gender::from_i64(gender).is_none() {
                return Err(ProviderError::validation(
                    contract::COLUMN_GENDER,
                    "pet requires valid gender",
                ));
            }
        }
        if let Some(weight) = values.weight {
            if weight < 0 {
                return Err(ProviderError::validation(
                    contract::COLUMN_WEIGHT,
                    "pet requires valid weight",
                ));
            }
        }
        // breed is unconstrained; null or empty means "unknown".
        Ok(())
    }
}
