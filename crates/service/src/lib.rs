//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates route handling from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod company_service;
pub mod errors;
#[cfg(test)]
pub mod test_support;
