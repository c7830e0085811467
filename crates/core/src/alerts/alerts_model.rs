//! Payment alert domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HIGH_AMOUNT_THRESHOLD, DEFAULT_RELEVANCE_WINDOW_DAYS, DEFAULT_URGENT_WINDOW_DAYS,
};
use crate::debts::DebtType;

// =============================================================================
// Status & Priority
// =============================================================================

/// Where a due date sits relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Overdue,
    Urgent,
    Upcoming,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Overdue => "overdue",
            AlertStatus::Urgent => "urgent",
            AlertStatus::Upcoming => "upcoming",
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display priority of an alert.
///
/// Ordered by rank: Critical < High < Medium, so an ascending sort lists
/// the most pressing alerts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    Critical,
    High,
    Medium,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Critical => "CRITICAL",
            AlertPriority::High => "HIGH",
            AlertPriority::Medium => "MEDIUM",
        }
    }
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Thresholds used by the alert classifier.
///
/// Defaults reproduce the fixed behavior: urgent within 3 days, relevant
/// within 30 days, HIGH priority for minimum payments above 5000 in any
/// currency. `high_amount_thresholds` overrides the amount per currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertConfig {
    pub urgent_window_days: i64,
    pub relevance_window_days: i64,
    pub default_high_amount_threshold: Decimal,
    pub high_amount_thresholds: HashMap<String, Decimal>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
            relevance_window_days: DEFAULT_RELEVANCE_WINDOW_DAYS,
            default_high_amount_threshold: DEFAULT_HIGH_AMOUNT_THRESHOLD,
            high_amount_thresholds: HashMap::new(),
        }
    }
}

impl AlertConfig {
    /// Amount above which a payment in `currency` is HIGH priority.
    pub fn high_amount_threshold(&self, currency: &str) -> Decimal {
        self.high_amount_thresholds
            .get(&currency.to_uppercase())
            .copied()
            .unwrap_or(self.default_high_amount_threshold)
    }
}

// =============================================================================
// Alert
// =============================================================================

/// Due-date risk snapshot of one debt, relative to a reference day.
///
/// Recomputed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAlert {
    pub debt_id: String,
    pub debt_name: String,
    pub debt_type: DebtType,
    pub due_date: NaiveDate,
    /// Negative once the due date has passed.
    pub days_until_due: i64,
    pub minimum_payment: Decimal,
    pub current_balance: Decimal,
    pub interest_rate: Decimal,
    pub currency: String,
    pub status: AlertStatus,
    pub priority: AlertPriority,
}

/// Presentation-ready projection of a [`PaymentAlert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAlertDto {
    pub id: String,
    pub debt_id: String,
    pub debt_name: String,
    pub debt_type: DebtType,
    /// ISO-8601 calendar date.
    pub due_date: String,
    pub days_until_due: i64,
    pub minimum_payment: Decimal,
    pub current_balance: Decimal,
    pub interest_rate: Decimal,
    pub currency: String,
    pub status: AlertStatus,
    pub priority: AlertPriority,
    pub time_description: String,
    pub formatted_amount: String,
}
