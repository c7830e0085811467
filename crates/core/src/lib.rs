//! Debt Planning Core - amortization math, repayment strategies, and payment alerts.
//!
//! This crate is storage-agnostic: it reads debt snapshots supplied through
//! [`debts::DebtRepositoryTrait`] and returns plain value results. Every
//! calculation is pure and synchronous.

pub mod alerts;
pub mod constants;
pub mod debts;
pub mod errors;
pub mod planning;
pub mod strategies;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
