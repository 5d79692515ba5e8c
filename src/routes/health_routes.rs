use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tracing::error;

use crate::database::connection::ping;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Estado del servicio y de la base de datos
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let (status, database) = match ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(e) => {
            error!("❌ Health check: base de datos no disponible: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let healthy = status == StatusCode::OK;
    let label = if healthy { "ok" } else { "degraded" };

    (
        status,
        Json(json!({
            "success": healthy,
            "status": label,
            "database": database,
            "environment": state.config.environment,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
