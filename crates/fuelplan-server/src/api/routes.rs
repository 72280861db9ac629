//! REST API routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use fuelplan_core::models::RoutePlan;

use crate::error::PlanError;
use crate::planner::{self, RoutePlanRequest};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new().route("/v1/routes/plan", post(plan_route_handler))
}

async fn plan_route_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RoutePlanRequest>,
) -> Result<Json<RoutePlan>, PlanError> {
    tracing::info!(
        "Planning route {} -> {}",
        request.origin.trim(),
        request.destination.trim()
    );
    let plan = planner::plan_route(&state.maps, &state.maps, &state.config, request).await?;
    Ok(Json(plan))
}
