pub mod appointment_routes;
pub mod health_routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la aplicación, con CORS y trazas por request
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/appointments", appointment_routes::create_appointment_router())
        .merge(health_routes::create_health_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_middleware()),
        )
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
