use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use debtplan_core::planning::{DebtSummary, PlanningServiceTrait};

use crate::{error::ApiResult, main_lib::AppState, models::SummaryRequest};

async fn get_debt_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> ApiResult<Json<DebtSummary>> {
    let service = state.planning_service(request.debts);
    let summary = service.get_debt_summary(&request.user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/debts/summary", post(get_debt_summary))
}
