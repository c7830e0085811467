//! Payment strategy domain models.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::debts::PayoffProjection;
use crate::errors::{Error, Result};

/// Heuristic used to rank debts for the monthly surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Highest interest rate first.
    Avalanche,
    /// Smallest balance first.
    Snowball,
    /// Fixed-weight blend of rate and inverse balance.
    Balanced,
}

impl StrategyType {
    pub const ALL: [StrategyType; 3] = [
        StrategyType::Avalanche,
        StrategyType::Snowball,
        StrategyType::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::Avalanche => "avalanche",
            StrategyType::Snowball => "snowball",
            StrategyType::Balanced => "balanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrategyType::Avalanche => "Avalanche",
            StrategyType::Snowball => "Snowball",
            StrategyType::Balanced => "Balanced",
        }
    }
}

impl std::fmt::Display for StrategyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(StrategyType::Avalanche),
            "snowball" => Ok(StrategyType::Snowball),
            "balanced" => Ok(StrategyType::Balanced),
            other => Err(Error::invalid_input(format!(
                "Unknown payment strategy '{}'",
                other
            ))),
        }
    }
}

/// Whether the budget covers the sum of all minimum payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRegime {
    /// Budget below the combined minimums: payments are scaled proportionally.
    Insufficient,
    /// Every minimum is met and the surplus goes to the top-ranked debt.
    Sufficient,
}

/// Payment assigned to one debt under a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub debt_id: String,
    pub debt_name: String,
    pub monthly_payment: Decimal,
    pub payoff: PayoffProjection,
    /// 1-based rank in the strategy's sort order.
    pub priority: u32,
}

impl PaymentPlan {
    pub fn is_payable(&self) -> bool {
        self.payoff.is_payable()
    }

    pub fn months_to_payoff(&self) -> Option<u32> {
        self.payoff.months_to_payoff()
    }

    pub fn total_interest(&self) -> Option<Decimal> {
        self.payoff.total_interest()
    }
}

/// Portfolio-wide outcome of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    #[serde(rename = "type")]
    pub strategy_type: StrategyType,
    pub total_monthly_payment: Decimal,
    pub regime: BudgetRegime,
    pub plans: Vec<PaymentPlan>,
    /// Horizon of the slowest debt; `None` if any debt is unpayable.
    pub total_months_to_payoff: Option<u32>,
    /// Absolute interest paid across all payable plans.
    pub total_interest: Decimal,
    /// Interest paid when every debt receives exactly its minimum payment.
    pub baseline_interest: Option<Decimal>,
    /// `baseline_interest - total_interest`, when both are finite.
    pub total_interest_saved: Option<Decimal>,
    pub unpayable_debt_ids: Vec<String>,
    pub reasoning: String,
}

impl StrategyResult {
    /// True when every plan retires its debt.
    pub fn is_fully_payable(&self) -> bool {
        self.unpayable_debt_ids.is_empty()
    }

    /// Plan ranked first by the strategy, if any.
    pub fn focus_plan(&self) -> Option<&PaymentPlan> {
        self.plans.iter().find(|plan| plan.priority == 1)
    }
}

/// All strategies evaluated against the same debts and budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub available_monthly: Decimal,
    pub strategies: Vec<StrategyResult>,
    pub recommended: Option<StrategyType>,
}

impl StrategyComparison {
    pub fn get(&self, strategy_type: StrategyType) -> Option<&StrategyResult> {
        self.strategies
            .iter()
            .find(|result| result.strategy_type == strategy_type)
    }
}
