//! Reminder status domain models.

use serde::{Deserialize, Serialize};

/// What a reminder status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    /// A fixed end or maturity date is approaching or has arrived.
    Maturity,
    /// An insurance premium payment is due.
    Premium,
    /// Open-ended plan with no end date; nothing to count down to.
    Ongoing,
    /// The relevant date has already passed with no further obligation.
    Expired,
}

/// Reminder computed for a single investment against a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderStatus {
    pub message: String,
    /// Signed day count to the relevant target date; negative means past
    /// due, `None` means the investment is open-ended and has no target.
    pub days_remaining: Option<i64>,
    /// Due or maturing within the next 30 days (inclusive).
    pub is_urgent: bool,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
}
