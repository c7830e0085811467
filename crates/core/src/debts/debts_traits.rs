//! Debt repository contract.
//!
//! The planning engine never stores debts. Hosts supply snapshots through
//! this trait, whatever their storage happens to be.

use super::debts_model::Debt;
use crate::errors::Result;

/// Trait defining how the planning engine obtains debt snapshots.
pub trait DebtRepositoryTrait: Send + Sync {
    /// Lists every debt owned by `user_id`, in the order the store keeps them.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Debt>>;

    /// Retrieves a debt by its ID.
    fn get_by_id(&self, debt_id: &str) -> Result<Debt>;
}
