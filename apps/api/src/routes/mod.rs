pub mod health;

use axum::{routing::get, Router};

use crate::resources::handlers::resource_router;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let resources = resource_router(&state.services);

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/db/health", get(health::db_health_handler))
        .with_state(state)
        .merge(resources)
}
