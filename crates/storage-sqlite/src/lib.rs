//! SQLite storage implementation for Nestegg.
//!
//! This crate is the record store: it implements the repository trait
//! defined in `nestegg-core` on top of a single-table SQLite document
//! store. Records are persisted in their tagged JSON form, so everything
//! the domain model serializes round-trips without field loss or type
//! coercion.
//!
//! This is the only crate with a SQLite dependency; `core` is
//! storage-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod investments;

// Re-export database utilities
pub use db::{open, open_in_memory};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export the repository
pub use investments::SqliteInvestmentRepository;

// Re-export from nestegg-core for convenience
pub use nestegg_core::errors::{DatabaseError, Error, Result};
