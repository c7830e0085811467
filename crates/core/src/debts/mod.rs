//! Debts module - domain models, amortization math, and the repository contract.

mod amortization;
mod debts_model;
mod debts_traits;

pub use amortization::{monthly_rate, simulate_payoff, PayoffProjection};
pub use debts_model::{Debt, DebtStatus, DebtType, NewDebt};
pub use debts_traits::DebtRepositoryTrait;
