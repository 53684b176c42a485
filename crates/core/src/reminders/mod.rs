//! Reminders module - status engine, aggregation, and service.

mod reminders_aggregation;
mod reminders_engine;
mod reminders_model;
mod reminders_service;


// Re-export the public interface
pub use reminders_aggregation::{filter_and_sort_urgent, sort_by_created_desc};
pub use reminders_engine::compute_status;
pub use reminders_model::{ReminderKind, ReminderStatus};
pub use reminders_service::{ReminderService, ReminderServiceTrait};
