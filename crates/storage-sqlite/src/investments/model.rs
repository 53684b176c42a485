//! Database row representation of an investment record.

use nestegg_core::investments::Investment;
use nestegg_core::Result;

use crate::errors::StorageError;

/// Raw `investments` table row.
///
/// The `data` column holds the record's tagged JSON; the remaining columns
/// exist for keying and recency ordering and are derived from it.
#[derive(Debug, Clone)]
pub struct InvestmentRow {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub data: String,
}

impl InvestmentRow {
    pub fn from_domain(investment: &Investment) -> Result<Self> {
        let data = serde_json::to_string(investment)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(InvestmentRow {
            id: investment.id.clone(),
            name: investment.name.clone(),
            created_at: investment.created_at,
            data,
        })
    }

    /// Fails when the stored JSON no longer matches a known record shape
    /// (unrecognized `type` tag, missing or unparsable field); such rows
    /// surface as errors, never as a substitute status.
    pub fn into_domain(self) -> Result<Investment> {
        serde_json::from_str(&self.data).map_err(|e| {
            StorageError::Serialization(format!("record '{}': {}", self.id, e)).into()
        })
    }
}
