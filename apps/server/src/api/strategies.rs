use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use debtplan_core::planning::PlanningServiceTrait;
use debtplan_core::strategies::{StrategyComparison, StrategyResult, StrategyType};

use crate::{error::ApiResult, main_lib::AppState, models::StrategyRequest};

async fn calculate_strategy(
    Path(strategy): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<StrategyRequest>,
) -> ApiResult<Json<StrategyResult>> {
    let strategy_type: StrategyType = strategy.parse()?;
    let service = state.planning_service(request.debts);
    let result =
        service.calculate_strategy(&request.user_id, strategy_type, request.available_monthly)?;
    Ok(Json(result))
}

async fn compare_strategies(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StrategyRequest>,
) -> ApiResult<Json<StrategyComparison>> {
    let service = state.planning_service(request.debts);
    let comparison = service.compare_strategies(&request.user_id, request.available_monthly)?;
    Ok(Json(comparison))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/strategies/compare", post(compare_strategies))
        .route("/strategies/{strategy}", post(calculate_strategy))
}
