//! Unit tests for the strategy allocator.

use super::*;
use crate::debts::{Debt, DebtStatus, DebtType, PayoffProjection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn create_debt(id: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
    Debt {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        debt_type: DebtType::CreditCard,
        name: format!("Debt {}", id),
        original_amount: balance.max(dec!(1)),
        current_balance: balance,
        interest_rate: rate,
        minimum_payment: minimum,
        due_date: None,
        status: DebtStatus::Active,
        currency: "USD".to_string(),
    }
}

fn payment_for(result: &StrategyResult, debt_id: &str) -> Decimal {
    result
        .plans
        .iter()
        .find(|plan| plan.debt_id == debt_id)
        .map(|plan| plan.monthly_payment)
        .unwrap()
}

fn total_paid(result: &StrategyResult) -> Decimal {
    result.plans.iter().map(|plan| plan.monthly_payment).sum()
}

// ==================== Ranking ====================

#[test]
fn test_avalanche_ranks_by_rate_descending() {
    let debts = vec![
        create_debt("low", dec!(500), dec!(5), dec!(25)),
        create_debt("high", dec!(8000), dec!(24.99), dec!(200)),
        create_debt("mid", dec!(3000), dec!(12), dec!(90)),
    ];

    let result = calculate_avalanche(&debts, dec!(1000));
    let order: Vec<&str> = result.plans.iter().map(|p| p.debt_id.as_str()).collect();
    assert_eq!(order, vec!["high", "mid", "low"]);
    assert_eq!(result.focus_plan().unwrap().debt_id, "high");
}

#[test]
fn test_snowball_ranks_by_balance_ascending() {
    let debts = vec![
        create_debt("big", dec!(9000), dec!(7), dec!(200)),
        create_debt("small", dec!(400), dec!(22), dec!(25)),
        create_debt("medium", dec!(2500), dec!(15), dec!(75)),
    ];

    let result = calculate_snowball(&debts, dec!(1000));
    let order: Vec<&str> = result.plans.iter().map(|p| p.debt_id.as_str()).collect();
    assert_eq!(order, vec!["small", "medium", "big"]);
}

#[test]
fn test_balanced_score() {
    let debt = create_debt("a", dec!(1000), dec!(20), dec!(50));
    assert_eq!(balanced_score(&debt), Some(dec!(0.1204)));
}

#[test]
fn test_balanced_ranks_by_composite_score() {
    let debts = vec![
        create_debt("a", dec!(500), dec!(18), dec!(25)),
        create_debt("b", dec!(10000), dec!(20), dec!(250)),
        create_debt("c", dec!(1), dec!(5), dec!(1)),
    ];

    let result = calculate_balanced(&debts, dec!(1000));
    let order: Vec<&str> = result.plans.iter().map(|p| p.debt_id.as_str()).collect();
    assert_eq!(order, vec!["c", "b", "a"]);
}

#[test]
fn test_balanced_ranks_zero_balance_last() {
    let debts = vec![
        create_debt("cleared", dec!(0), dec!(29.99), dec!(0)),
        create_debt("open", dec!(2000), dec!(3), dec!(60)),
    ];

    assert_eq!(balanced_score(&debts[0]), None);
    let result = calculate_balanced(&debts, dec!(300));
    assert_eq!(result.plans[0].debt_id, "open");
    assert_eq!(result.plans[1].debt_id, "cleared");
    assert_eq!(payment_for(&result, "open"), dec!(300));
}

#[test]
fn test_ties_keep_input_order() {
    let debts = vec![
        create_debt("first", dec!(1000), dec!(10), dec!(50)),
        create_debt("second", dec!(1000), dec!(10), dec!(50)),
    ];

    for strategy in StrategyType::ALL {
        let result = calculate_strategy(strategy, &debts, dec!(200));
        assert_eq!(result.plans[0].debt_id, "first", "{}", strategy);
    }
}

#[test]
fn test_inactive_debts_are_ignored() {
    let mut paid = create_debt("paid", dec!(0), dec!(30), dec!(100));
    paid.status = DebtStatus::PaidOff;
    let mut defaulted = create_debt("defaulted", dec!(5000), dec!(35), dec!(100));
    defaulted.status = DebtStatus::Default;
    let debts = vec![paid, defaulted, create_debt("open", dec!(1000), dec!(10), dec!(50))];

    let result = calculate_avalanche(&debts, dec!(200));
    assert_eq!(result.plans.len(), 1);
    assert_eq!(result.plans[0].debt_id, "open");
    assert_eq!(result.plans[0].monthly_payment, dec!(200));
}

#[test]
fn test_priorities_are_one_based_and_sequential() {
    let debts = vec![
        create_debt("a", dec!(100), dec!(1), dec!(10)),
        create_debt("b", dec!(200), dec!(2), dec!(10)),
        create_debt("c", dec!(300), dec!(3), dec!(10)),
    ];

    let result = calculate_snowball(&debts, dec!(100));
    let priorities: Vec<u32> = result.plans.iter().map(|p| p.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3]);
}

// ==================== Allocation regimes ====================

#[test]
fn test_insufficient_budget_scales_proportionally() {
    let debts = vec![
        create_debt("d1", dec!(4000), dec!(10), dec!(200)),
        create_debt("d2", dec!(6000), dec!(20), dec!(300)),
    ];

    for strategy in StrategyType::ALL {
        let result = calculate_strategy(strategy, &debts, dec!(400));
        assert_eq!(result.regime, BudgetRegime::Insufficient);
        assert_eq!(payment_for(&result, "d1"), dec!(160));
        assert_eq!(payment_for(&result, "d2"), dec!(240));
        assert_eq!(total_paid(&result), dec!(400));
    }
}

#[test]
fn test_sufficient_budget_sends_surplus_to_top_debt() {
    let debts = vec![
        create_debt("d1", dec!(4000), dec!(10), dec!(200)),
        create_debt("d2", dec!(6000), dec!(20), dec!(300)),
    ];

    let avalanche = calculate_avalanche(&debts, dec!(800));
    assert_eq!(avalanche.regime, BudgetRegime::Sufficient);
    assert_eq!(payment_for(&avalanche, "d2"), dec!(600));
    assert_eq!(payment_for(&avalanche, "d1"), dec!(200));

    let snowball = calculate_snowball(&debts, dec!(800));
    assert_eq!(payment_for(&snowball, "d1"), dec!(500));
    assert_eq!(payment_for(&snowball, "d2"), dec!(300));
    assert_eq!(total_paid(&snowball), dec!(800));
}

#[test]
fn test_exact_minimum_budget_is_sufficient() {
    let debts = vec![
        create_debt("d1", dec!(4000), dec!(10), dec!(200)),
        create_debt("d2", dec!(6000), dec!(20), dec!(300)),
    ];

    let result = calculate_avalanche(&debts, dec!(500));
    assert_eq!(result.regime, BudgetRegime::Sufficient);
    assert_eq!(payment_for(&result, "d1"), dec!(200));
    assert_eq!(payment_for(&result, "d2"), dec!(300));
}

#[test]
fn test_allocate_payments_with_zero_minimums_and_negative_budget() {
    let debt = create_debt("d1", dec!(100), dec!(10), dec!(0));
    let (regime, payments) = allocate_payments(&[&debt], dec!(-10));
    assert_eq!(regime, BudgetRegime::Insufficient);
    assert_eq!(payments, vec![Decimal::ZERO]);
}

// ==================== Aggregation ====================

#[test]
fn test_aggregates_slowest_horizon_and_interest() {
    let debts = vec![
        create_debt("fast", dec!(1000), dec!(12), dec!(100)),
        create_debt("slow", dec!(1000), dec!(0), dec!(50)),
    ];

    // Avalanche sends the 450 surplus to "fast" (12%).
    let result = calculate_avalanche(&debts, dec!(600));
    let fast = result.plans.iter().find(|p| p.debt_id == "fast").unwrap();
    let slow = result.plans.iter().find(|p| p.debt_id == "slow").unwrap();

    assert_eq!(fast.monthly_payment, dec!(550));
    assert_eq!(slow.months_to_payoff(), Some(20));
    assert_eq!(result.total_months_to_payoff, Some(20));
    assert_eq!(
        result.total_interest,
        fast.total_interest().unwrap() + slow.total_interest().unwrap()
    );
    assert!(result.is_fully_payable());
}

#[test]
fn test_interest_saved_against_minimum_baseline() {
    let debts = vec![create_debt("only", dec!(1000), dec!(12), dec!(100))];

    let result = calculate_avalanche(&debts, dec!(600));
    let baseline = result.baseline_interest.unwrap();
    let saved = result.total_interest_saved.unwrap();

    assert_eq!(result.total_interest, dec!(14.10));
    assert_eq!(saved, baseline - result.total_interest);
    assert!(saved > Decimal::ZERO);
}

#[test]
fn test_minimum_only_budget_saves_nothing() {
    let debts = vec![
        create_debt("a", dec!(1000), dec!(12), dec!(100)),
        create_debt("b", dec!(2000), dec!(6), dec!(80)),
    ];

    let result = calculate_snowball(&debts, dec!(180));
    assert_eq!(result.total_interest_saved, Some(Decimal::ZERO));
}

#[test]
fn test_unpayable_debt_is_reported_explicitly() {
    let debts = vec![
        create_debt("trap", dec!(10000), dec!(40), dec!(300)),
        create_debt("ok", dec!(500), dec!(10), dec!(50)),
    ];

    // Snowball puts the surplus on "ok"; "trap" only gets its 300 minimum.
    let result = calculate_snowball(&debts, dec!(400));
    let trap = result.plans.iter().find(|p| p.debt_id == "trap").unwrap();

    assert_eq!(trap.payoff, PayoffProjection::Unpayable);
    assert_eq!(trap.months_to_payoff(), None);
    assert_eq!(result.unpayable_debt_ids, vec!["trap".to_string()]);
    assert_eq!(result.total_months_to_payoff, None);
    assert_eq!(result.baseline_interest, None);
    assert_eq!(result.total_interest_saved, None);
    assert_eq!(
        result.total_interest,
        result.plans[0].total_interest().unwrap()
    );
    assert!(!result.is_fully_payable());
}

#[test]
fn test_no_active_debts() {
    let result = calculate_balanced(&[], dec!(250));
    assert!(result.plans.is_empty());
    assert_eq!(result.total_months_to_payoff, Some(0));
    assert_eq!(result.total_interest, Decimal::ZERO);
    assert_eq!(result.reasoning, "There are no active debts to plan for.");
}

#[test]
fn test_reasoning_mentions_focus_and_regime() {
    let debts = vec![
        create_debt("d1", dec!(4000), dec!(10), dec!(200)),
        create_debt("d2", dec!(6000), dec!(18.5), dec!(300)),
    ];

    let sufficient = calculate_avalanche(&debts, dec!(800));
    assert!(sufficient.reasoning.contains("Debt d2"));
    assert!(sufficient.reasoning.contains("18.5%"));
    assert!(sufficient.reasoning.contains("remaining budget"));

    let insufficient = calculate_avalanche(&debts, dec!(400));
    assert!(insufficient.reasoning.contains("does not cover"));
    assert!(insufficient.reasoning.contains("500"));
}

// ==================== Comparison ====================

#[test]
fn test_compare_recommends_lowest_interest() {
    let debts = vec![
        create_debt("small", dec!(1000), dec!(5), dec!(50)),
        create_debt("pricey", dec!(5000), dec!(25), dec!(150)),
    ];

    let comparison = compare_strategies(&debts, dec!(400));
    assert_eq!(comparison.strategies.len(), 3);

    let avalanche = comparison.get(StrategyType::Avalanche).unwrap();
    let snowball = comparison.get(StrategyType::Snowball).unwrap();
    assert!(avalanche.total_interest < snowball.total_interest);
    assert_eq!(comparison.recommended, Some(StrategyType::Avalanche));
}

#[test]
fn test_compare_without_payable_strategy() {
    let debts = vec![create_debt("trap", dec!(10000), dec!(40), dec!(300))];

    let comparison = compare_strategies(&debts, dec!(300));
    assert!(comparison.strategies.iter().all(|s| !s.is_fully_payable()));
    assert_eq!(comparison.recommended, None);
}

// ==================== Serialization ====================

#[test]
fn test_strategy_type_parsing() {
    assert_eq!("Avalanche".parse::<StrategyType>().unwrap(), StrategyType::Avalanche);
    assert_eq!(" snowball ".parse::<StrategyType>().unwrap(), StrategyType::Snowball);
    assert!("hybrid".parse::<StrategyType>().is_err());
}

#[test]
fn test_result_serializes_to_plain_record() {
    let debts = vec![create_debt("d1", dec!(1000), dec!(12), dec!(100))];
    let result = calculate_avalanche(&debts, dec!(600));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "avalanche");
    assert_eq!(json["totalMonthlyPayment"], 600.0);
    assert_eq!(json["regime"], "sufficient");
    assert_eq!(json["plans"][0]["debtId"], "d1");
    assert_eq!(json["plans"][0]["priority"], 1);
    assert_eq!(json["plans"][0]["payoff"]["status"], "PAYABLE");
    assert_eq!(json["plans"][0]["payoff"]["monthsToPayoff"], 2);
    assert_eq!(json["totalMonthsToPayoff"], 2);
}
