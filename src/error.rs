//! Typed errors for the provider. All variants are caller-visible and non-retryable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The URI matched no registered pattern, or matched one the operation does not support.
    #[error("cannot route unknown URI: {0}")]
    InvalidRoute(String),
    /// A present field violated its domain rule.
    #[error("validation: {field}: {rule}")]
    Validation {
        field: &'static str,
        rule: &'static str,
    },
    /// Storage declined to assign a row id for the insert.
    #[error("failed to insert row for {0}")]
    InsertFailed(String),
    /// The backing database could not be opened or created.
    #[error("storage unavailable: {0}")]
    UnavailableStorage(#[source] sqlx::Error),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl ProviderError {
    pub(crate) fn validation(field: &'static str, rule: &'static str) -> Self {
        ProviderError::Validation { field, rule }
    }
}
