use std::{collections::HashMap, net::SocketAddr, time::Duration};

use debtplan_core::alerts::AlertConfig;
use rust_decimal::Decimal;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub alert_config: AlertConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid DP_LISTEN_ADDR");
        let cors_allow = std::env::var("DP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("DP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            alert_config: alert_config_from_env(),
        }
    }
}

/// Alert thresholds, falling back to the built-in defaults for unset or
/// unparseable variables.
fn alert_config_from_env() -> AlertConfig {
    let defaults = AlertConfig::default();

    let urgent_window_days = std::env::var("DP_ALERT_URGENT_DAYS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(defaults.urgent_window_days);
    let relevance_window_days = std::env::var("DP_ALERT_RELEVANCE_DAYS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(defaults.relevance_window_days);
    let default_high_amount_threshold = std::env::var("DP_HIGH_AMOUNT_THRESHOLD")
        .ok()
        .and_then(|v| v.trim().parse::<Decimal>().ok())
        .unwrap_or(defaults.default_high_amount_threshold);
    let high_amount_thresholds = std::env::var("DP_HIGH_AMOUNT_THRESHOLDS")
        .map(|v| parse_currency_thresholds(&v))
        .unwrap_or_default();

    AlertConfig {
        urgent_window_days,
        relevance_window_days,
        default_high_amount_threshold,
        high_amount_thresholds,
    }
}

/// Parses `JPY=750000,INR=400000` into a currency -> amount map.
/// Malformed pairs are skipped.
pub fn parse_currency_thresholds(raw: &str) -> HashMap<String, Decimal> {
    raw.split(',')
        .filter_map(|pair| {
            let (currency, amount) = pair.split_once('=')?;
            let currency = currency.trim().to_uppercase();
            if currency.is_empty() {
                return None;
            }
            let amount = amount.trim().parse::<Decimal>().ok()?;
            Some((currency, amount))
        })
        .collect()
}
