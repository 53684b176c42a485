use std::sync::Arc;

use chrono::NaiveDate;

use super::reminders_aggregation::filter_and_sort_urgent;
use super::reminders_engine::compute_status;
use super::reminders_model::ReminderStatus;
use crate::errors::Result;
use crate::investments::{Investment, InvestmentRepositoryTrait};

/// Trait for reminder queries over the record store.
pub trait ReminderServiceTrait: Send + Sync {
    /// Returns the records due or maturing within the urgency window,
    /// soonest first.
    fn get_upcoming_reminders(&self, today: NaiveDate) -> Result<Vec<Investment>>;

    /// Computes the reminder status of a single record.
    fn get_reminder_status(&self, investment_id: &str, today: NaiveDate)
        -> Result<ReminderStatus>;
}

/// Read-only service layering the status engine over the record store.
pub struct ReminderService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl ReminderService {
    /// Creates a new ReminderService instance.
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        ReminderService { repository }
    }
}

impl ReminderServiceTrait for ReminderService {
    fn get_upcoming_reminders(&self, today: NaiveDate) -> Result<Vec<Investment>> {
        let investments = self.repository.load_investments()?;
        Ok(filter_and_sort_urgent(&investments, today))
    }

    fn get_reminder_status(
        &self,
        investment_id: &str,
        today: NaiveDate,
    ) -> Result<ReminderStatus> {
        let investment = self.repository.get_investment(investment_id)?;
        Ok(compute_status(&investment, today))
    }
}
