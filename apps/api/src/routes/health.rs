use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::db;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": state.config.service_name
    }))
}

/// GET /db/health
/// Readiness probe: 200 `{ok: true}` when the store answers, 500 otherwise.
pub async fn db_health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match db::ping(&state.db).await {
        Ok(ok) => (StatusCode::OK, Json(json!({ "ok": ok }))),
        Err(e) => {
            tracing::warn!("Database health check failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
        }
    }
}

/// GET /
/// Lists the entry points so a bare request does not end in a 404.
pub async fn index_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("{} running", state.config.service_name),
        "endpoints": {
            "documents": "/documents",
            "stats": "/documents/stats",
            "search": "/documents/search",
            "personnel": "/recursos",
            "projects": "/proyectos",
            "health": "/health",
            "db_health": "/db/health"
        }
    }))
}
