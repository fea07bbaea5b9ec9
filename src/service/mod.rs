//! PetProvider: URI-routed CRUD over the pets table, with field validation.

mod crud;
mod validation;
pub use crud::PetProvider;
pub use validation::PetValidator;
