//! Planning service contract.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::planning_model::DebtSummary;
use crate::alerts::PaymentAlert;
use crate::debts::PayoffProjection;
use crate::errors::Result;
use crate::strategies::{StrategyComparison, StrategyResult, StrategyType};

/// Trait defining the debt planning operations offered to hosts.
pub trait PlanningServiceTrait: Send + Sync {
    /// Allocates `available_monthly` across the user's active debts.
    fn calculate_strategy(
        &self,
        user_id: &str,
        strategy_type: StrategyType,
        available_monthly: Decimal,
    ) -> Result<StrategyResult>;

    /// Evaluates every strategy on the same budget and recommends one.
    fn compare_strategies(
        &self,
        user_id: &str,
        available_monthly: Decimal,
    ) -> Result<StrategyComparison>;

    /// Relevant alerts in display order.
    ///
    /// `reference_date` defaults to today and `max_days` to the configured
    /// relevance window.
    fn get_payment_alerts(
        &self,
        user_id: &str,
        reference_date: Option<NaiveDate>,
        max_days: Option<i64>,
    ) -> Result<Vec<PaymentAlert>>;

    /// Totals across the user's active debts.
    fn get_debt_summary(&self, user_id: &str) -> Result<DebtSummary>;

    /// What-if projection for a single debt at a chosen monthly payment.
    fn project_payoff(&self, debt_id: &str, monthly_payment: Decimal)
        -> Result<PayoffProjection>;
}
