//! Allocation of a monthly budget across debts.
//!
//! Each strategy only decides the ranking. The budget split itself is shared:
//!
//! - When the budget is below the combined minimum payments, every debt gets
//!   a share proportional to its minimum and the ranking is display-only.
//! - Otherwise every debt gets its minimum and the whole surplus goes to the
//!   top-ranked debt.

use std::cmp::Ordering;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::{BALANCED_BALANCE_WEIGHT, BALANCED_RATE_WEIGHT, PERCENT};
use crate::debts::Debt;

use super::strategy_model::{
    BudgetRegime, PaymentPlan, StrategyComparison, StrategyResult, StrategyType,
};

/// Ranks by interest rate, highest first.
pub fn calculate_avalanche(debts: &[Debt], available_monthly: Decimal) -> StrategyResult {
    calculate_strategy(StrategyType::Avalanche, debts, available_monthly)
}

/// Ranks by current balance, smallest first.
pub fn calculate_snowball(debts: &[Debt], available_monthly: Decimal) -> StrategyResult {
    calculate_strategy(StrategyType::Snowball, debts, available_monthly)
}

/// Ranks by [`balanced_score`], highest first.
pub fn calculate_balanced(debts: &[Debt], available_monthly: Decimal) -> StrategyResult {
    calculate_strategy(StrategyType::Balanced, debts, available_monthly)
}

/// Runs `strategy_type` over the active debts in `debts`.
pub fn calculate_strategy(
    strategy_type: StrategyType,
    debts: &[Debt],
    available_monthly: Decimal,
) -> StrategyResult {
    let ranked = rank_debts(strategy_type, debts);
    let (regime, payments) = allocate_payments(&ranked, available_monthly);

    let plans: Vec<PaymentPlan> = ranked
        .iter()
        .zip(payments)
        .enumerate()
        .map(|(index, (debt, monthly_payment))| PaymentPlan {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            monthly_payment,
            payoff: debt.project_payoff(monthly_payment),
            priority: index as u32 + 1,
        })
        .collect();

    let unpayable_debt_ids: Vec<String> = plans
        .iter()
        .filter(|plan| !plan.is_payable())
        .map(|plan| plan.debt_id.clone())
        .collect();
    if !unpayable_debt_ids.is_empty() {
        warn!(
            "{} strategy leaves {} debt(s) unpayable: {:?}",
            strategy_type.label(),
            unpayable_debt_ids.len(),
            unpayable_debt_ids
        );
    }

    let total_months_to_payoff = if unpayable_debt_ids.is_empty() {
        Some(
            plans
                .iter()
                .filter_map(PaymentPlan::months_to_payoff)
                .max()
                .unwrap_or(0),
        )
    } else {
        None
    };
    let total_interest: Decimal = plans.iter().filter_map(PaymentPlan::total_interest).sum();

    let baseline_interest = minimum_payment_baseline(&ranked);
    let total_interest_saved = match baseline_interest {
        Some(baseline) if unpayable_debt_ids.is_empty() => Some(baseline - total_interest),
        _ => None,
    };

    let reasoning = build_reasoning(strategy_type, regime, &ranked, available_monthly);

    StrategyResult {
        strategy_type,
        total_monthly_payment: available_monthly,
        regime,
        plans,
        total_months_to_payoff,
        total_interest,
        baseline_interest,
        total_interest_saved,
        unpayable_debt_ids,
        reasoning,
    }
}

/// Runs every strategy and recommends the cheapest fully payable one.
///
/// Ties on interest go to the shorter horizon, then to the order of
/// [`StrategyType::ALL`].
pub fn compare_strategies(debts: &[Debt], available_monthly: Decimal) -> StrategyComparison {
    let strategies: Vec<StrategyResult> = StrategyType::ALL
        .iter()
        .map(|strategy_type| calculate_strategy(*strategy_type, debts, available_monthly))
        .collect();

    let recommended = strategies
        .iter()
        .filter(|result| result.is_fully_payable())
        .min_by(|a, b| {
            a.total_interest
                .cmp(&b.total_interest)
                .then(a.total_months_to_payoff.cmp(&b.total_months_to_payoff))
        })
        .map(|result| result.strategy_type);

    StrategyComparison {
        available_monthly,
        strategies,
        recommended,
    }
}

/// Composite score `rate/100 * 0.6 + (1/balance) * 0.4`.
///
/// Returns `None` for a non-positive balance, which has no inverse. Such
/// debts rank after every scored debt.
pub fn balanced_score(debt: &Debt) -> Option<Decimal> {
    if debt.current_balance <= Decimal::ZERO {
        return None;
    }
    let rate_term = debt.interest_rate / PERCENT * BALANCED_RATE_WEIGHT;
    let balance_term = Decimal::ONE / debt.current_balance * BALANCED_BALANCE_WEIGHT;
    Some(rate_term + balance_term)
}

/// Filters to active debts and orders them for `strategy_type`.
///
/// Sorting is stable, so ties keep their input order.
pub fn rank_debts(strategy_type: StrategyType, debts: &[Debt]) -> Vec<&Debt> {
    let mut active: Vec<&Debt> = debts.iter().filter(|debt| debt.is_active()).collect();

    match strategy_type {
        StrategyType::Avalanche => {
            active.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate));
        }
        StrategyType::Snowball => {
            active.sort_by(|a, b| a.current_balance.cmp(&b.current_balance));
        }
        StrategyType::Balanced => {
            let mut scored: Vec<(Option<Decimal>, &Debt)> = active
                .into_iter()
                .map(|debt| {
                    let score = balanced_score(debt);
                    if score.is_none() {
                        warn!(
                            "Debt {} has no positive balance; ranking it last for the balanced strategy",
                            debt.id
                        );
                    }
                    (score, debt)
                })
                .collect();
            scored.sort_by(|(a, _), (b, _)| match (a, b) {
                (Some(a), Some(b)) => b.cmp(a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
            active = scored.into_iter().map(|(_, debt)| debt).collect();
        }
    }

    active
}

/// Splits `available_monthly` across already-ranked debts.
///
/// Returns the regime that applied and one payment per debt, in rank order.
pub fn allocate_payments(
    ranked: &[&Debt],
    available_monthly: Decimal,
) -> (BudgetRegime, Vec<Decimal>) {
    let minimum_total: Decimal = ranked.iter().map(|debt| debt.minimum_payment).sum();

    if minimum_total > available_monthly {
        debug!(
            "Budget {} is below combined minimums {}; scaling payments proportionally",
            available_monthly, minimum_total
        );
        let payments = ranked
            .iter()
            .map(|debt| {
                debt.minimum_payment
                    .checked_div(minimum_total)
                    .map(|share| share * available_monthly)
                    .unwrap_or(Decimal::ZERO)
            })
            .collect();
        return (BudgetRegime::Insufficient, payments);
    }

    let surplus = available_monthly - minimum_total;
    debug!(
        "Budget {} covers minimums {}; surplus {} goes to the top-ranked debt",
        available_monthly, minimum_total, surplus
    );
    let payments = ranked
        .iter()
        .enumerate()
        .map(|(index, debt)| {
            if index == 0 {
                debt.minimum_payment + surplus
            } else {
                debt.minimum_payment
            }
        })
        .collect();
    (BudgetRegime::Sufficient, payments)
}

/// Total interest when every debt receives exactly its minimum payment.
fn minimum_payment_baseline(debts: &[&Debt]) -> Option<Decimal> {
    debts
        .iter()
        .map(|debt| debt.total_interest(debt.minimum_payment))
        .sum()
}

fn build_reasoning(
    strategy_type: StrategyType,
    regime: BudgetRegime,
    ranked: &[&Debt],
    available_monthly: Decimal,
) -> String {
    let Some(focus) = ranked.first() else {
        return "There are no active debts to plan for.".to_string();
    };

    let approach = match strategy_type {
        StrategyType::Avalanche => format!(
            "The avalanche method targets {} first because it carries the highest interest rate ({}%), which keeps total interest as low as possible.",
            focus.name,
            focus.interest_rate.normalize()
        ),
        StrategyType::Snowball => format!(
            "The snowball method targets {} first because it has the smallest balance ({} {}), so it is paid off soonest and builds momentum.",
            focus.name,
            focus.current_balance.round_dp(2),
            focus.currency
        ),
        StrategyType::Balanced => format!(
            "The balanced method targets {} first, weighing its interest rate ({}%) against how quickly its balance can be cleared.",
            focus.name,
            focus.interest_rate.normalize()
        ),
    };

    match regime {
        BudgetRegime::Sufficient => format!(
            "{} Every debt receives its minimum payment and the remaining budget goes to {}.",
            approach, focus.name
        ),
        BudgetRegime::Insufficient => {
            let minimum_total: Decimal = ranked.iter().map(|debt| debt.minimum_payment).sum();
            format!(
                "{} However, the budget of {} does not cover the combined minimum payments of {}, so each debt receives a share proportional to its minimum payment.",
                approach,
                available_monthly.round_dp(2),
                minimum_total.round_dp(2)
            )
        }
    }
}
