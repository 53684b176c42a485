use chrono::{Local, NaiveDate};

/// Signed whole-calendar-day count from `reference` to `target`.
///
/// Both values are plain calendar dates with no time-of-day component, so
/// the difference is already the midnight-to-midnight day count: negative
/// when the target has passed, zero when it falls on the reference date.
/// Equivalent to `ceil((targetMidnight - referenceMidnight) / 86_400_000)`
/// on wall-clock timestamps normalized to midnight, without the
/// daylight-saving hazards of differencing instants.
pub fn days_until(reference: NaiveDate, target: NaiveDate) -> i64 {
    target.signed_duration_since(reference).num_days()
}

/// The current calendar date in the machine's local timezone.
///
/// Callers hand this to the status engine explicitly; the engine itself
/// never reads a clock.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
