use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Hard cap on simulated months (50 years). A simulation that reaches it
/// reports the cap as its payoff horizon.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Months per year, used to derive the monthly rate from an annual percentage.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Divisor turning a percentage (18.5) into a fraction (0.185).
pub const PERCENT: Decimal = dec!(100);

/// Weight of the interest-rate term in the balanced strategy score.
pub const BALANCED_RATE_WEIGHT: Decimal = dec!(0.6);

/// Weight of the inverse-balance term in the balanced strategy score.
pub const BALANCED_BALANCE_WEIGHT: Decimal = dec!(0.4);

/// Days before the due date during which an alert is urgent.
pub const DEFAULT_URGENT_WINDOW_DAYS: i64 = 3;

/// Default look-ahead window for relevant alerts.
pub const DEFAULT_RELEVANCE_WINDOW_DAYS: i64 = 30;

/// Minimum payment above which an alert is raised to HIGH priority.
pub const DEFAULT_HIGH_AMOUNT_THRESHOLD: Decimal = dec!(5000);
