//! Request-level error taxonomy.
//!
//! Only two failures ever cross the request boundary: a rejected fuel
//! profile and a missing route (which also covers route-provider
//! transport failures, logged at the call site). Station-lookup
//! failures never surface here; they are absorbed into WARNING events.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fuelplan_core::models::ProfileError;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),
    #[error("route not found")]
    RouteNotFound,
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let status = match self {
            PlanError::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            PlanError::RouteNotFound => StatusCode::NOT_FOUND,
        };
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
