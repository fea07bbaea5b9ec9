//! Embedded data-access layer for pet records.
//!
//! Four operations (query, insert, update, delete) are keyed by a content URI:
//! `content://<authority>/pets` addresses the whole table,
//! `content://<authority>/pets/<id>` addresses one row. Each call classifies
//! the URI, validates the proposed field values, and runs a single SQLite
//! statement. UI layers sit on top and react to the returned rows, item URIs,
//! or affected-row counts.

pub mod contract;
pub mod error;
pub mod service;
pub mod sql;
pub mod store;
pub mod uri;
pub mod values;

pub use contract::Gender;
pub use error::ProviderError;
pub use service::{PetProvider, PetValidator};
pub use store::PetStore;
pub use uri::Route;
pub use values::PetValues;
