//! Planning summary models.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT;
use crate::debts::Debt;

/// Portfolio totals across a user's active debts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub active_count: usize,
    pub total_balance: Decimal,
    pub total_original_amount: Decimal,
    pub total_minimum_payment: Decimal,
    pub total_monthly_interest: Decimal,
    /// Interest rate weighted by current balance; zero when nothing is owed.
    pub weighted_average_rate: Decimal,
    /// Share of the combined original amount already repaid, 0..=100.
    pub progress: u8,
}

impl DebtSummary {
    pub fn from_debts(debts: &[Debt]) -> Self {
        let active: Vec<&Debt> = debts.iter().filter(|debt| debt.is_active()).collect();

        let total_balance: Decimal = active.iter().map(|debt| debt.current_balance).sum();
        let total_original_amount: Decimal =
            active.iter().map(|debt| debt.original_amount).sum();
        let weighted_rate_sum: Decimal = active
            .iter()
            .map(|debt| debt.interest_rate * debt.current_balance)
            .sum();

        let weighted_average_rate = if total_balance > Decimal::ZERO {
            weighted_rate_sum / total_balance
        } else {
            Decimal::ZERO
        };

        let progress = if total_original_amount > Decimal::ZERO {
            ((total_original_amount - total_balance) / total_original_amount * PERCENT)
                .max(Decimal::ZERO)
                .min(PERCENT)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u8()
                .unwrap_or(0)
        } else {
            0
        };

        Self {
            active_count: active.len(),
            total_balance,
            total_original_amount,
            total_minimum_payment: active.iter().map(|debt| debt.minimum_payment).sum(),
            total_monthly_interest: active.iter().map(|debt| debt.monthly_interest()).sum(),
            weighted_average_rate,
            progress,
        }
    }
}
