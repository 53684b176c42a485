//! Reminder status engine.
//!
//! [`compute_status`] maps an investment record plus an explicit reference
//! date to a [`ReminderStatus`]. It is pure and total: no clock reads, no
//! I/O, and every record of the four known variants yields a status.

use chrono::{Datelike, NaiveDate};

use crate::constants::{DAYS_PER_YEAR, URGENT_WINDOW_DAYS};
use crate::investments::{Investment, InvestmentDetails};
use crate::utils::time_utils::days_until;

use super::reminders_model::{ReminderKind, ReminderStatus};

/// Computes the reminder status of `investment` as seen from `today`.
///
/// `today` is supplied by the caller (normalized to a plain calendar date)
/// so results are deterministic and reproducible in tests.
pub fn compute_status(investment: &Investment, today: NaiveDate) -> ReminderStatus {
    match &investment.details {
        InvestmentDetails::FixedDeposit { maturity_date, .. } => {
            fixed_deposit_status(today, *maturity_date)
        }
        InvestmentDetails::RecurringPlan { end_date, .. } => {
            recurring_plan_status(today, *end_date)
        }
        InvestmentDetails::InsurancePolicy {
            next_premium_date,
            maturity_date,
            ..
        } => insurance_status(today, *next_premium_date, *maturity_date),
        InvestmentDetails::ProvidentFund { maturity_year, .. } => {
            provident_fund_status(today, *maturity_year)
        }
    }
}

fn fixed_deposit_status(today: NaiveDate, maturity_date: NaiveDate) -> ReminderStatus {
    let days = days_until(today, maturity_date);
    if days < 0 {
        return ReminderStatus {
            message: "Matured".to_string(),
            days_remaining: Some(days),
            is_urgent: false,
            kind: ReminderKind::Expired,
        };
    }
    if days == 0 {
        return ReminderStatus {
            message: "Matures Today".to_string(),
            days_remaining: Some(0),
            is_urgent: true,
            kind: ReminderKind::Maturity,
        };
    }
    ReminderStatus {
        message: format!("Matures in {} days", days),
        days_remaining: Some(days),
        is_urgent: days <= URGENT_WINDOW_DAYS,
        kind: ReminderKind::Maturity,
    }
}

fn recurring_plan_status(today: NaiveDate, end_date: Option<NaiveDate>) -> ReminderStatus {
    let Some(end_date) = end_date else {
        // Terminal state: an open-ended plan never becomes urgent.
        return ReminderStatus {
            message: "Ongoing".to_string(),
            days_remaining: None,
            is_urgent: false,
            kind: ReminderKind::Ongoing,
        };
    };
    let days = days_until(today, end_date);
    if days < 0 {
        return ReminderStatus {
            message: "Ended".to_string(),
            days_remaining: Some(days),
            is_urgent: false,
            kind: ReminderKind::Expired,
        };
    }
    // An end date falling today reads "Ends in 0 days"; there is no
    // dedicated wording for it.
    ReminderStatus {
        message: format!("Ends in {} days", days),
        days_remaining: Some(days),
        is_urgent: days <= URGENT_WINDOW_DAYS,
        kind: ReminderKind::Maturity,
    }
}

fn insurance_status(
    today: NaiveDate,
    next_premium_date: NaiveDate,
    maturity_date: NaiveDate,
) -> ReminderStatus {
    let maturity_days = days_until(today, maturity_date);
    let premium_days = days_until(today, next_premium_date);

    // Maturity is reported only while it is still ahead and strictly sooner
    // than the next premium; a tie goes to the premium.
    if maturity_days >= 0 && maturity_days < premium_days {
        return ReminderStatus {
            message: format!("Matures in {} days", maturity_days),
            days_remaining: Some(maturity_days),
            is_urgent: maturity_days <= URGENT_WINDOW_DAYS,
            kind: ReminderKind::Maturity,
        };
    }

    if premium_days < 0 {
        return ReminderStatus {
            message: "Premium Overdue".to_string(),
            days_remaining: Some(premium_days),
            is_urgent: true,
            kind: ReminderKind::Premium,
        };
    }
    if premium_days == 0 {
        return ReminderStatus {
            message: "Premium Due Today".to_string(),
            days_remaining: Some(0),
            is_urgent: true,
            kind: ReminderKind::Premium,
        };
    }
    ReminderStatus {
        message: format!("Premium due in {} days", premium_days),
        days_remaining: Some(premium_days),
        is_urgent: premium_days <= URGENT_WINDOW_DAYS,
        kind: ReminderKind::Premium,
    }
}

fn provident_fund_status(today: NaiveDate, maturity_year: i32) -> ReminderStatus {
    let years_left = i64::from(maturity_year - today.year());
    if years_left < 0 {
        return ReminderStatus {
            message: "Matured".to_string(),
            days_remaining: Some(0),
            is_urgent: false,
            kind: ReminderKind::Expired,
        };
    }
    if years_left == 0 {
        // days_remaining here is a rank sentinel, not a real day count.
        return ReminderStatus {
            message: "Matures this year".to_string(),
            days_remaining: Some(1),
            is_urgent: true,
            kind: ReminderKind::Maturity,
        };
    }
    // Year-granularity maturities are never urgent, even one year out;
    // days_remaining is an approximation used only for sort ordering.
    ReminderStatus {
        message: format!("Matures in {} years", years_left),
        days_remaining: Some(years_left * DAYS_PER_YEAR),
        is_urgent: false,
        kind: ReminderKind::Maturity,
    }
}
