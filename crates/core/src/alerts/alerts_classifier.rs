use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::debts::Debt;

use super::alerts_format::{format_amount, time_description};
use super::alerts_model::{AlertConfig, AlertPriority, AlertStatus, PaymentAlert, PaymentAlertDto};

/// Current local calendar day, the default reference for alerts.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `reference_date` to `due_date`; negative when overdue.
///
/// Both sides are calendar days, so time of day never shifts the count.
pub fn days_until_due(due_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (due_date - reference_date).num_days()
}

/// Overdue before the due day, urgent within the urgent window, upcoming after.
pub fn classify_status(days_until_due: i64, config: &AlertConfig) -> AlertStatus {
    if days_until_due < 0 {
        AlertStatus::Overdue
    } else if days_until_due <= config.urgent_window_days {
        AlertStatus::Urgent
    } else {
        AlertStatus::Upcoming
    }
}

/// CRITICAL on or after the due day; HIGH inside the urgent window or for a
/// large payment; MEDIUM otherwise.
pub fn classify_priority(
    days_until_due: i64,
    amount: Decimal,
    currency: &str,
    config: &AlertConfig,
) -> AlertPriority {
    if days_until_due <= 0 {
        AlertPriority::Critical
    } else if days_until_due <= config.urgent_window_days
        || amount > config.high_amount_threshold(currency)
    {
        AlertPriority::High
    } else {
        AlertPriority::Medium
    }
}

impl PaymentAlert {
    /// Builds an alert with the default thresholds.
    ///
    /// Returns `None` unless the debt is active and has a due date.
    pub fn from_debt(debt: &Debt, reference_date: NaiveDate) -> Option<Self> {
        Self::from_debt_with_config(debt, reference_date, &AlertConfig::default())
    }

    pub fn from_debt_with_config(
        debt: &Debt,
        reference_date: NaiveDate,
        config: &AlertConfig,
    ) -> Option<Self> {
        if !debt.is_active() {
            return None;
        }
        let due_date = debt.due_date?;

        let days = days_until_due(due_date, reference_date);
        Some(Self {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            debt_type: debt.debt_type,
            due_date,
            days_until_due: days,
            minimum_payment: debt.minimum_payment,
            current_balance: debt.current_balance,
            interest_rate: debt.interest_rate,
            currency: debt.currency.clone(),
            status: classify_status(days, config),
            priority: classify_priority(days, debt.minimum_payment, &debt.currency, config),
        })
    }

    /// Priority rank first, then the sooner due date.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.days_until_due.cmp(&other.days_until_due))
    }

    /// True when due within `max_days`. Overdue alerts are always relevant.
    pub fn is_relevant(&self, max_days: i64) -> bool {
        self.days_until_due <= max_days
    }

    pub fn to_dto(&self) -> PaymentAlertDto {
        PaymentAlertDto::from(self)
    }
}

impl From<&PaymentAlert> for PaymentAlertDto {
    fn from(alert: &PaymentAlert) -> Self {
        Self {
            id: format!("alert-{}", alert.debt_id),
            debt_id: alert.debt_id.clone(),
            debt_name: alert.debt_name.clone(),
            debt_type: alert.debt_type,
            due_date: alert.due_date.format("%Y-%m-%d").to_string(),
            days_until_due: alert.days_until_due,
            minimum_payment: alert.minimum_payment,
            current_balance: alert.current_balance,
            interest_rate: alert.interest_rate,
            currency: alert.currency.clone(),
            status: alert.status,
            priority: alert.priority,
            time_description: time_description(alert.days_until_due),
            formatted_amount: format_amount(alert.minimum_payment, &alert.currency),
        }
    }
}

/// Sorts alerts into display order.
pub fn sort_alerts(alerts: &mut [PaymentAlert]) {
    alerts.sort_by(PaymentAlert::compare);
}

/// Alerts for every eligible debt due within `max_days`, in display order.
pub fn collect_alerts(
    debts: &[Debt],
    reference_date: NaiveDate,
    max_days: i64,
    config: &AlertConfig,
) -> Vec<PaymentAlert> {
    let mut alerts: Vec<PaymentAlert> = debts
        .iter()
        .filter_map(|debt| PaymentAlert::from_debt_with_config(debt, reference_date, config))
        .filter(|alert| alert.is_relevant(max_days))
        .collect();
    sort_alerts(&mut alerts);

    debug!(
        "Built {} payment alert(s) from {} debt(s) as of {}",
        alerts.len(),
        debts.len(),
        reference_date
    );
    alerts
}
