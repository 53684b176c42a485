//! Investment repository implementation.

mod model;
mod repository;

pub use repository::SqliteInvestmentRepository;
