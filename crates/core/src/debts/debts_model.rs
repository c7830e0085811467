//! Debt domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ValidationError, Error, Result};

/// Category of a liability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    Mortgage,
    AutoLoan,
    StudentLoan,
    StoreCredit,
    #[default]
    Other,
}

impl DebtType {
    /// Returns the string representation of this debt type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "credit_card",
            DebtType::PersonalLoan => "personal_loan",
            DebtType::Mortgage => "mortgage",
            DebtType::AutoLoan => "auto_loan",
            DebtType::StudentLoan => "student_loan",
            DebtType::StoreCredit => "store_credit",
            DebtType::Other => "other",
        }
    }
}

impl std::fmt::Display for DebtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a debt. Transitions are managed outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    #[default]
    Active,
    PaidOff,
    Default,
}

/// Point-in-time snapshot of a single liability.
///
/// The planning engine only reads these values; balances and statuses are
/// maintained by whoever records payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub name: String,
    pub original_amount: Decimal,
    pub current_balance: Decimal,
    /// Annual rate as a percentage, e.g. `18.5`.
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
    pub due_date: Option<NaiveDate>,
    pub status: DebtStatus,
    pub currency: String,
}

impl Debt {
    /// Builds a fresh active debt from validated input.
    ///
    /// The balance defaults to the original amount and a UUID is assigned
    /// when the input carries no id.
    pub fn from_new(user_id: &str, new_debt: NewDebt) -> Result<Self> {
        new_debt.validate()?;
        if user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }

        let current_balance = new_debt.current_balance.unwrap_or(new_debt.original_amount);
        Ok(Self {
            id: new_debt
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            debt_type: new_debt.debt_type,
            name: new_debt.name.trim().to_string(),
            original_amount: new_debt.original_amount,
            current_balance,
            interest_rate: new_debt.interest_rate,
            minimum_payment: new_debt.minimum_payment,
            due_date: new_debt.due_date,
            status: DebtStatus::Active,
            currency: new_debt.currency.trim().to_uppercase(),
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }
}

/// Input model for creating a new debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub debt_type: DebtType,
    pub name: String,
    pub original_amount: Decimal,
    /// Defaults to `original_amount` when omitted.
    pub current_balance: Option<Decimal>,
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
    pub due_date: Option<NaiveDate>,
    pub currency: String,
}

impl NewDebt {
    /// Validates the new debt data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Debt name cannot be empty"));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::invalid_input("Currency cannot be empty"));
        }
        if self.original_amount < Decimal::ZERO {
            return Err(Error::invalid_input("Original amount cannot be negative"));
        }
        if let Some(balance) = self.current_balance {
            if balance < Decimal::ZERO {
                return Err(Error::invalid_input("Current balance cannot be negative"));
            }
            if balance > self.original_amount {
                return Err(Error::invalid_input(
                    "Current balance cannot exceed the original amount",
                ));
            }
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(Error::invalid_input("Interest rate cannot be negative"));
        }
        if self.minimum_payment < Decimal::ZERO {
            return Err(Error::invalid_input("Minimum payment cannot be negative"));
        }
        Ok(())
    }
}
