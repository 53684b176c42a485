//! Nestegg Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Nestegg, a tracker for
//! personal financial instruments (fixed deposits, recurring plans,
//! insurance policies, provident funds) and their maturity or payment
//! reminders. It is storage-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod investments;
pub mod reminders;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
