//! Error type definitions for the catalog store
//!
//! The repository layer reports what went wrong against the database file;
//! the application layer wraps it and adds the cases the HTTP surface needs.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository layer errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

}

/// Repository layer specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A query was issued before `initialize` completed
    #[error("Database has not been initialized")]
    NotInitialized,

    /// A query was issued after `close`
    #[error("Database connection is closed")]
    Closed,

    /// Driver level failures
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failures while preparing the database location or reading the schema
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema script could not be applied
    #[error("Schema application failed ({origin}): {message}")]
    Schema { origin: String, message: String },

    /// Record not found
    #[error("Record not found: {table} with {field} = {value}")]
    RecordNotFound {
        table: String,
        field: String,
        value: String,
    },

    /// Input rejected before it reached the database
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A seeded account password could not be hashed
    #[error("Credential error: {message}")]
    Credential { message: String },

    /// A stored value could not be mapped into its model
    #[error("Invalid stored value in {column}: {message}")]
    InvalidValue { column: String, message: String },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

}

impl RepositoryError {
    /// Create a record not found error
    pub fn record_not_found<T: Into<String>, F: Into<String>, V: Into<String>>(
        table: T,
        field: F,
        value: V,
    ) -> Self {
        Self::RecordNotFound {
            table: table.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a schema application error
    pub fn schema<O: Into<String>, M: Into<String>>(origin: O, message: M) -> Self {
        Self::Schema {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a credential hashing error
    pub fn credential<S: Into<String>>(message: S) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create an invalid stored value error
    pub fn invalid_value<C: Into<String>, M: Into<String>>(column: C, message: M) -> Self {
        Self::InvalidValue {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Whether the error comes from using the store outside its open lifecycle
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::Closed)
    }
}
