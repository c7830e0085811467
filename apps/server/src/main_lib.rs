use std::sync::Arc;

use debtplan_core::alerts::AlertConfig;
use debtplan_core::debts::Debt;
use debtplan_core::planning::PlanningService;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, snapshot::SnapshotDebtRepository};

pub struct AppState {
    pub alert_config: AlertConfig,
}

impl AppState {
    /// Planning service over the debts supplied with one request.
    pub fn planning_service(&self, debts: Vec<Debt>) -> PlanningService {
        PlanningService::with_alert_config(
            Arc::new(SnapshotDebtRepository::new(debts)),
            self.alert_config.clone(),
        )
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("DP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    tracing::info!(
        "Alert thresholds: urgent within {} days, relevant within {} days, high amount above {}",
        config.alert_config.urgent_window_days,
        config.alert_config.relevance_window_days,
        config.alert_config.default_high_amount_threshold
    );
    Arc::new(AppState {
        alert_config: config.alert_config.clone(),
    })
}
