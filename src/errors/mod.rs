//! Centralized error handling for the catalog store
//!
//! Errors are split by layer:
//!
//! - **Repository Errors**: lifecycle misuse, SQLite failures, schema and seed failures
//! - **Application Errors**: validation, lookups and everything the HTTP layer maps to a status
//!
//! # Usage
//!
//! ```rust
//! use catalog_store::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;
