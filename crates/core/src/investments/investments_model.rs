//! Investment domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Billing cadence of an insurance premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

/// Variant-specific payload of an investment record.
///
/// Internally tagged on `type`, so a full record serializes to the flat
/// tagged JSON shape the record store persists. An unrecognized tag fails
/// deserialization outright instead of producing a record with made-up
/// semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InvestmentDetails {
    /// Lump sum locked until a fixed maturity date.
    #[serde(rename_all = "camelCase")]
    FixedDeposit {
        amount: Decimal,
        start_date: NaiveDate,
        maturity_date: NaiveDate,
    },
    /// Monthly contribution plan; no end date means open-ended.
    #[serde(rename_all = "camelCase")]
    RecurringPlan {
        monthly_amount: Decimal,
        start_date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
    /// Policy with two independent date obligations: the next premium due
    /// date and the policy maturity date.
    #[serde(rename_all = "camelCase")]
    InsurancePolicy {
        policy_number: String,
        premium_amount: Decimal,
        frequency: PremiumFrequency,
        next_premium_date: NaiveDate,
        maturity_date: NaiveDate,
    },
    /// Year-granularity fund; only calendar years matter.
    #[serde(rename_all = "camelCase")]
    ProvidentFund {
        start_year: i32,
        yearly_contribution: Decimal,
        maturity_year: i32,
    },
}

impl InvestmentDetails {
    /// Stable variant name, used for logs and type-change checks.
    pub fn variant(&self) -> &'static str {
        match self {
            InvestmentDetails::FixedDeposit { .. } => "fixedDeposit",
            InvestmentDetails::RecurringPlan { .. } => "recurringPlan",
            InvestmentDetails::InsurancePolicy { .. } => "insurancePolicy",
            InvestmentDetails::ProvidentFund { .. } => "providentFund",
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            InvestmentDetails::FixedDeposit { amount, .. } => {
                ensure_positive(*amount, "amount")
            }
            InvestmentDetails::RecurringPlan { monthly_amount, .. } => {
                ensure_positive(*monthly_amount, "monthlyAmount")
            }
            InvestmentDetails::InsurancePolicy {
                policy_number,
                premium_amount,
                ..
            } => {
                if policy_number.trim().is_empty() {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "policyNumber".to_string(),
                    )));
                }
                ensure_positive(*premium_amount, "premiumAmount")
            }
            InvestmentDetails::ProvidentFund {
                yearly_contribution,
                ..
            } => ensure_positive(*yearly_contribution, "yearlyContribution"),
        }
    }
}

fn ensure_positive(amount: Decimal, field: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Field '{}' must be a positive amount",
            field
        ))));
    }
    Ok(())
}

/// Domain model representing a tracked investment record.
///
/// `id` and `created_at` are assigned once at insert time and never change;
/// `created_at` is an epoch-millisecond timestamp used as the default sort
/// key for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    #[serde(flatten)]
    pub details: InvestmentDetails,
}

/// Input model for creating a new investment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub details: InvestmentDetails,
}

impl NewInvestment {
    /// Validates the new investment data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment name cannot be empty".to_string(),
            )));
        }
        self.details.validate()
    }
}

/// Input model for updating an existing investment record.
///
/// The record's variant is fixed at creation; the service rejects updates
/// that switch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub details: InvestmentDetails,
}

impl InvestmentUpdate {
    /// Validates the investment update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment name cannot be empty".to_string(),
            )));
        }
        self.details.validate()
    }
}
