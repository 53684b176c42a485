//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes; adapters decide
/// what to do with them (re-render a list, re-evaluate reminders).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Investment records were created, updated, or deleted.
    InvestmentsChanged { investment_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates an InvestmentsChanged event.
    pub fn investments_changed(investment_ids: Vec<String>) -> Self {
        Self::InvestmentsChanged { investment_ids }
    }
}
