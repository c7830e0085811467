use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use debtplan_core::alerts::PaymentAlertDto;
use debtplan_core::planning::PlanningServiceTrait;

use crate::{error::ApiResult, main_lib::AppState, models::AlertsRequest};

/// Alerts for the user's debts, most pressing first.
async fn get_payment_alerts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AlertsRequest>,
) -> ApiResult<Json<Vec<PaymentAlertDto>>> {
    let service = state.planning_service(request.debts);
    let alerts = service.get_payment_alerts(
        &request.user_id,
        request.reference_date,
        request.max_days,
    )?;
    Ok(Json(alerts.iter().map(PaymentAlertDto::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/alerts", post(get_payment_alerts))
}
