//! Urgency filtering and list ordering over investment collections.

use chrono::NaiveDate;

use crate::investments::Investment;

use super::reminders_engine::compute_status;

/// Returns the investments whose status is urgent, soonest target first.
///
/// The ordering key is `days_remaining` with `None` ranked as zero; the
/// only `None` producers are open-ended plans, which are never urgent.
pub fn filter_and_sort_urgent(investments: &[Investment], today: NaiveDate) -> Vec<Investment> {
    let mut urgent: Vec<Investment> = investments
        .iter()
        .filter(|investment| compute_status(investment, today).is_urgent)
        .cloned()
        .collect();
    urgent.sort_by_key(|investment| {
        compute_status(investment, today)
            .days_remaining
            .unwrap_or(0)
    });
    urgent
}

/// Returns the full collection ordered by creation time, newest first.
///
/// `created_at` is assigned once per record, so this order is total and
/// stable.
pub fn sort_by_created_desc(investments: &[Investment]) -> Vec<Investment> {
    let mut ordered = investments.to_vec();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
}
