//! Content catalog and site settings store for a media streaming admin backend.
//!
//! [`database::DatabaseManager`] owns the SQLite file: schema, idempotent
//! seed data, catalog queries and the settings store. [`web`] exposes it as
//! a small JSON API.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod utils;
pub mod web;
