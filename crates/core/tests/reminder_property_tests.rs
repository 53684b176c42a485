//! Property-based tests for the reminder status engine and aggregation.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use nestegg_core::constants::URGENT_WINDOW_DAYS;
use nestegg_core::investments::{Investment, InvestmentDetails, PremiumFrequency};
use nestegg_core::reminders::{compute_status, filter_and_sort_urgent, ReminderKind};

// =============================================================================
// Generators
// =============================================================================

/// Generates an arbitrary calendar date; days capped at 28 so every
/// (year, month, day) triple is valid.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1u32..10_000_000).prop_map(Decimal::from)
}

/// Generates an arbitrary record of any of the four variants.
fn arb_details() -> impl Strategy<Value = InvestmentDetails> {
    prop_oneof![
        (arb_amount(), arb_date(), arb_date()).prop_map(|(amount, start_date, maturity_date)| {
            InvestmentDetails::FixedDeposit {
                amount,
                start_date,
                maturity_date,
            }
        }),
        (arb_amount(), arb_date(), proptest::option::of(arb_date())).prop_map(
            |(monthly_amount, start_date, end_date)| InvestmentDetails::RecurringPlan {
                monthly_amount,
                start_date,
                end_date,
            }
        ),
        (arb_amount(), arb_date(), arb_date()).prop_map(
            |(premium_amount, next_premium_date, maturity_date)| {
                InvestmentDetails::InsurancePolicy {
                    policy_number: "POL-1".to_string(),
                    premium_amount,
                    frequency: PremiumFrequency::Yearly,
                    next_premium_date,
                    maturity_date,
                }
            }
        ),
        (arb_amount(), 2000i32..2100, 2000i32..2100).prop_map(
            |(yearly_contribution, start_year, maturity_year)| {
                InvestmentDetails::ProvidentFund {
                    start_year,
                    yearly_contribution,
                    maturity_year,
                }
            }
        ),
    ]
}

fn investment(id: &str, created_at: i64, details: InvestmentDetails) -> Investment {
    Investment {
        id: id.to_string(),
        name: format!("Record {}", id),
        created_at,
        details,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A fixed deposit is urgent exactly when its maturity lies within the
    /// 30-day window, today included.
    #[test]
    fn prop_fd_urgent_iff_within_window(today in arb_date(), maturity in arb_date()) {
        let record = investment("fd", 1, InvestmentDetails::FixedDeposit {
            amount: Decimal::from(1000u32),
            start_date: today,
            maturity_date: maturity,
        });
        let status = compute_status(&record, today);
        let days = maturity.num_days_from_ce() as i64 - today.num_days_from_ce() as i64;
        prop_assert_eq!(status.is_urgent, (0..=URGENT_WINDOW_DAYS).contains(&days));
    }

    /// The reported day count equals the true calendar-day difference for
    /// any pair of dates, including pairs spanning DST transitions.
    #[test]
    fn prop_days_remaining_is_calendar_difference(today in arb_date(), maturity in arb_date()) {
        let record = investment("fd", 1, InvestmentDetails::FixedDeposit {
            amount: Decimal::from(1000u32),
            start_date: today,
            maturity_date: maturity,
        });
        let status = compute_status(&record, today);
        let expected = maturity.num_days_from_ce() as i64 - today.num_days_from_ce() as i64;
        prop_assert_eq!(status.days_remaining, Some(expected));
    }

    /// An open-ended recurring plan reports Ongoing and is never urgent,
    /// whatever the reference date.
    #[test]
    fn prop_open_ended_plan_never_urgent(today in arb_date(), start in arb_date()) {
        let record = investment("sip", 1, InvestmentDetails::RecurringPlan {
            monthly_amount: Decimal::from(500u32),
            start_date: start,
            end_date: None,
        });
        let status = compute_status(&record, today);
        prop_assert!(!status.is_urgent);
        prop_assert_eq!(status.kind, ReminderKind::Ongoing);
        prop_assert_eq!(status.days_remaining, None);
    }

    /// A provident fund maturing in the current calendar year is urgent on
    /// every day of that year; one maturing next year never is.
    #[test]
    fn prop_ppf_urgency_by_calendar_year(today in arb_date()) {
        let this_year = investment("ppf", 1, InvestmentDetails::ProvidentFund {
            start_year: today.year() - 15,
            yearly_contribution: Decimal::from(1000u32),
            maturity_year: today.year(),
        });
        prop_assert!(compute_status(&this_year, today).is_urgent);

        let next_year = investment("ppf", 1, InvestmentDetails::ProvidentFund {
            start_year: today.year() - 14,
            yearly_contribution: Decimal::from(1000u32),
            maturity_year: today.year() + 1,
        });
        prop_assert!(!compute_status(&next_year, today).is_urgent);
    }

    /// Identical inputs produce identical output: the engine holds no
    /// hidden state.
    #[test]
    fn prop_compute_status_idempotent(today in arb_date(), details in arb_details()) {
        let record = investment("r", 1, details);
        prop_assert_eq!(compute_status(&record, today), compute_status(&record, today));
    }

    /// The urgent view contains only urgent records and is ordered by
    /// ascending days remaining.
    #[test]
    fn prop_urgent_view_sorted_and_urgent(
        today in arb_date(),
        all_details in proptest::collection::vec(arb_details(), 0..20),
    ) {
        let records: Vec<Investment> = all_details
            .into_iter()
            .enumerate()
            .map(|(i, details)| investment(&format!("r{}", i), i as i64, details))
            .collect();

        let urgent = filter_and_sort_urgent(&records, today);
        prop_assert!(urgent.len() <= records.len());
        for record in &urgent {
            prop_assert!(compute_status(record, today).is_urgent);
        }

        let keys: Vec<i64> = urgent
            .iter()
            .map(|r| compute_status(r, today).days_remaining.unwrap_or(0))
            .collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
