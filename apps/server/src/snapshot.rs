use debtplan_core::debts::{Debt, DebtRepositoryTrait};
use debtplan_core::errors::{Error, Result};

/// Debt repository backed by the snapshot a client sent with its request.
pub struct SnapshotDebtRepository {
    debts: Vec<Debt>,
}

impl SnapshotDebtRepository {
    pub fn new(debts: Vec<Debt>) -> Self {
        Self { debts }
    }
}

impl DebtRepositoryTrait for SnapshotDebtRepository {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Debt>> {
        Ok(self
            .debts
            .iter()
            .filter(|debt| debt.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, debt_id: &str) -> Result<Debt> {
        self.debts
            .iter()
            .find(|debt| debt.id == debt_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Debt {} not found", debt_id)))
    }
}
