/// Days within which a maturity or payment counts as urgent (inclusive).
pub const URGENT_WINDOW_DAYS: i64 = 30;

/// Approximate day count per year, used to rank year-granularity maturities.
pub const DAYS_PER_YEAR: i64 = 365;
