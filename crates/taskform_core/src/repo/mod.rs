//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Provide the saved-form persistence boundary.
//! - Keep SQL details out of the service layer.

pub mod form_repo;
