use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;

use super::planning_model::DebtSummary;
use super::planning_traits::PlanningServiceTrait;
use crate::alerts::{collect_alerts, today, AlertConfig, PaymentAlert};
use crate::debts::{Debt, DebtRepositoryTrait, PayoffProjection};
use crate::errors::{Error, Result};
use crate::strategies::{self, StrategyComparison, StrategyResult, StrategyType};

/// Service running the planning engine over debts loaded from a repository.
///
/// Holds no state between calls apart from its collaborators, so one instance
/// can serve concurrent requests.
pub struct PlanningService {
    debt_repository: Arc<dyn DebtRepositoryTrait>,
    alert_config: AlertConfig,
}

impl PlanningService {
    pub fn new(debt_repository: Arc<dyn DebtRepositoryTrait>) -> Self {
        Self::with_alert_config(debt_repository, AlertConfig::default())
    }

    pub fn with_alert_config(
        debt_repository: Arc<dyn DebtRepositoryTrait>,
        alert_config: AlertConfig,
    ) -> Self {
        Self {
            debt_repository,
            alert_config,
        }
    }

    pub fn alert_config(&self) -> &AlertConfig {
        &self.alert_config
    }

    fn load_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        if user_id.trim().is_empty() {
            return Err(Error::invalid_input("User ID cannot be empty"));
        }
        let debts = self.debt_repository.list_by_user(user_id)?;
        debug!("Loaded {} debt(s) for user {}", debts.len(), user_id);
        Ok(debts)
    }
}

fn validate_amount(amount: Decimal, what: &str) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::invalid_input(format!(
            "{} cannot be negative (got {})",
            what, amount
        )));
    }
    Ok(())
}

impl PlanningServiceTrait for PlanningService {
    fn calculate_strategy(
        &self,
        user_id: &str,
        strategy_type: StrategyType,
        available_monthly: Decimal,
    ) -> Result<StrategyResult> {
        validate_amount(available_monthly, "Available monthly budget")?;
        let debts = self.load_debts(user_id)?;

        let result = strategies::calculate_strategy(strategy_type, &debts, available_monthly);
        info!(
            "Calculated {} strategy for user {}: {} plan(s), horizon {:?} months",
            strategy_type,
            user_id,
            result.plans.len(),
            result.total_months_to_payoff
        );
        Ok(result)
    }

    fn compare_strategies(
        &self,
        user_id: &str,
        available_monthly: Decimal,
    ) -> Result<StrategyComparison> {
        validate_amount(available_monthly, "Available monthly budget")?;
        let debts = self.load_debts(user_id)?;

        let comparison = strategies::compare_strategies(&debts, available_monthly);
        info!(
            "Compared strategies for user {}: recommended {:?}",
            user_id, comparison.recommended
        );
        Ok(comparison)
    }

    fn get_payment_alerts(
        &self,
        user_id: &str,
        reference_date: Option<NaiveDate>,
        max_days: Option<i64>,
    ) -> Result<Vec<PaymentAlert>> {
        let debts = self.load_debts(user_id)?;
        let reference_date = reference_date.unwrap_or_else(today);
        let max_days = max_days.unwrap_or(self.alert_config.relevance_window_days);

        Ok(collect_alerts(
            &debts,
            reference_date,
            max_days,
            &self.alert_config,
        ))
    }

    fn get_debt_summary(&self, user_id: &str) -> Result<DebtSummary> {
        let debts = self.load_debts(user_id)?;
        Ok(DebtSummary::from_debts(&debts))
    }

    fn project_payoff(
        &self,
        debt_id: &str,
        monthly_payment: Decimal,
    ) -> Result<PayoffProjection> {
        validate_amount(monthly_payment, "Monthly payment")?;
        let debt = self.debt_repository.get_by_id(debt_id)?;
        Ok(debt.project_payoff(monthly_payment))
    }
}
