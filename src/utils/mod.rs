//! Shared helpers for the catalog store

pub mod datetime;
pub mod hashing;
