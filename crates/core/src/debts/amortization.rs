//! Amortization math for a single debt.
//!
//! Every function here is pure: it reads a [`Debt`] snapshot and a candidate
//! monthly payment and never touches the snapshot itself.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PAYOFF_MONTHS, MONTHS_PER_YEAR, PERCENT};

use super::Debt;

/// Outcome of simulating a debt against a fixed monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoffProjection {
    /// The balance reaches zero (or the simulation cap) after `months`.
    #[serde(rename_all = "camelCase")]
    Payable {
        months_to_payoff: u32,
        total_interest: Decimal,
    },
    /// The payment never outpaces the interest accruing on the balance.
    Unpayable,
}

impl PayoffProjection {
    pub fn is_payable(&self) -> bool {
        matches!(self, PayoffProjection::Payable { .. })
    }

    pub fn months_to_payoff(&self) -> Option<u32> {
        match self {
            PayoffProjection::Payable {
                months_to_payoff, ..
            } => Some(*months_to_payoff),
            PayoffProjection::Unpayable => None,
        }
    }

    pub fn total_interest(&self) -> Option<Decimal> {
        match self {
            PayoffProjection::Payable { total_interest, .. } => Some(*total_interest),
            PayoffProjection::Unpayable => None,
        }
    }
}

/// Converts an annual percentage rate into the rate applied once per month.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT
}

/// Simulates reducing-balance amortization month by month.
///
/// Interest and principal are accumulated in one pass, so the month count and
/// the interest total always describe the same schedule. The loop is bounded
/// by [`MAX_PAYOFF_MONTHS`]; hitting the cap still reports a payable horizon
/// of exactly that many months.
pub fn simulate_payoff(
    balance: Decimal,
    annual_rate_percent: Decimal,
    monthly_payment: Decimal,
) -> PayoffProjection {
    let rate = monthly_rate(annual_rate_percent);

    if monthly_payment <= balance * rate {
        return PayoffProjection::Unpayable;
    }
    if balance <= Decimal::ZERO {
        return PayoffProjection::Payable {
            months_to_payoff: 0,
            total_interest: Decimal::ZERO,
        };
    }

    let mut remaining = balance;
    let mut months = 0u32;
    let mut total_interest = Decimal::ZERO;

    while remaining > Decimal::ZERO && months < MAX_PAYOFF_MONTHS {
        let interest = remaining * rate;
        let principal = (monthly_payment - interest).min(remaining);
        if principal <= Decimal::ZERO {
            return PayoffProjection::Unpayable;
        }
        remaining -= principal;
        total_interest += interest;
        months += 1;
    }

    if remaining > Decimal::ZERO {
        debug!(
            "Payoff simulation hit the {}-month cap with {} still outstanding",
            MAX_PAYOFF_MONTHS, remaining
        );
    }

    PayoffProjection::Payable {
        months_to_payoff: months,
        total_interest,
    }
}

impl Debt {
    /// Percent of the original amount already repaid, 0..=100.
    pub fn progress(&self) -> u8 {
        if self.original_amount.is_zero() {
            return 0;
        }
        let paid = (self.original_amount - self.current_balance) / self.original_amount * PERCENT;
        paid.max(Decimal::ZERO)
            .min(PERCENT)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(0)
    }

    /// Interest accruing on the current balance over one month.
    pub fn monthly_interest(&self) -> Decimal {
        self.current_balance * monthly_rate(self.interest_rate)
    }

    /// Full projection of paying `monthly_payment` every month from the current balance.
    pub fn project_payoff(&self, monthly_payment: Decimal) -> PayoffProjection {
        simulate_payoff(self.current_balance, self.interest_rate, monthly_payment)
    }

    /// Months until payoff, or `None` when the payment cannot retire the balance.
    pub fn months_to_payoff(&self, monthly_payment: Decimal) -> Option<u32> {
        self.project_payoff(monthly_payment).months_to_payoff()
    }

    /// Interest paid over the payoff horizon, or `None` when unpayable.
    pub fn total_interest(&self, monthly_payment: Decimal) -> Option<Decimal> {
        self.project_payoff(monthly_payment).total_interest()
    }

    /// True when the debt is active and `reference_date` falls after its due day.
    pub fn is_past_due(&self, reference_date: NaiveDate) -> bool {
        match self.due_date {
            Some(due_date) => self.is_active() && reference_date > due_date,
            None => false,
        }
    }
}
