use log::debug;
use std::sync::Arc;

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::reminders::sort_by_created_desc;

/// Service for managing investment records.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance.
    pub fn new(
        repository: Arc<dyn InvestmentRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        InvestmentService {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn get_investments(&self) -> Result<Vec<Investment>> {
        let investments = self.repository.load_investments()?;
        Ok(sort_by_created_desc(&investments))
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        self.repository.get_investment(investment_id)
    }

    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        debug!(
            "Creating {} investment '{}'",
            new_investment.details.variant(),
            new_investment.name
        );
        let created = self.repository.insert_new_investment(new_investment).await?;
        self.event_sink
            .emit(DomainEvent::investments_changed(vec![created.id.clone()]));
        Ok(created)
    }

    async fn update_investment(&self, investment_update: InvestmentUpdate) -> Result<Investment> {
        investment_update.validate()?;

        // The variant is fixed at creation; an edit may change fields, not
        // the instrument kind.
        let current = self.repository.get_investment(&investment_update.id)?;
        if std::mem::discriminant(&current.details)
            != std::mem::discriminant(&investment_update.details)
        {
            return Err(Error::ConstraintViolation(format!(
                "Investment type cannot change from '{}' to '{}'",
                current.details.variant(),
                investment_update.details.variant()
            )));
        }

        let updated = self.repository.update_investment(investment_update).await?;
        self.event_sink
            .emit(DomainEvent::investments_changed(vec![updated.id.clone()]));
        Ok(updated)
    }

    async fn delete_investment(&self, investment_id: String) -> Result<usize> {
        let deleted = self
            .repository
            .delete_investment(investment_id.clone())
            .await?;
        if deleted > 0 {
            debug!("Deleted investment {}", investment_id);
            self.event_sink
                .emit(DomainEvent::investments_changed(vec![investment_id]));
        }
        Ok(deleted)
    }
}
