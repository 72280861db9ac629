//! REST API for the fuelplan server.

mod routes;

use crate::state::AppState;
use axum::Router;

pub fn routes() -> Router<std::sync::Arc<AppState>> {
    routes::create_router()
}
