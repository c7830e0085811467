//! Request bodies for the planning endpoints.
//!
//! Every request carries the debt snapshot to plan for; the server keeps no
//! debts of its own.

use chrono::NaiveDate;
use debtplan_core::debts::Debt;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRequest {
    pub user_id: String,
    pub debts: Vec<Debt>,
    pub available_monthly: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsRequest {
    pub user_id: String,
    pub debts: Vec<Debt>,
    pub reference_date: Option<NaiveDate>,
    pub max_days: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub user_id: String,
    pub debts: Vec<Debt>,
}
