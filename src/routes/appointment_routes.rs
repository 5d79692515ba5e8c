use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::appointment_controller::AppointmentController;
use crate::dto::api_response::ApiResponse;
use crate::dto::appointment_dto::{AppointmentRequest, AppointmentResponse};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, ApiError, AppError};

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_appointments)
                .post(create_appointment)
                .put(missing_id)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment)
                .fallback(method_not_allowed),
        )
}

/// Convertir el cuerpo en el payload tipado. Un cuerpo vacío equivale a `{}`.
fn parse_request(body: &Bytes) -> Result<AppointmentRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AppointmentRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
}

async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AppointmentResponse>>>, ApiError> {
    let controller = AppointmentController::new(state.pool.clone());
    let appointments = controller.list().await.map_err(|e| state.reject(e))?;
    Ok(Json(ApiResponse::success(appointments)))
}

async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, ApiError> {
    let controller = AppointmentController::new(state.pool.clone());
    let appointment = controller.get_by_id(&id).await.map_err(|e| state.reject(e))?;
    Ok(Json(ApiResponse::success(appointment)))
}

async fn create_appointment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentResponse>>), ApiError> {
    let request = parse_request(&body).map_err(|e| state.reject(e))?;
    let controller = AppointmentController::new(state.pool.clone());
    let appointment = controller.create(request).await.map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(appointment))))
}

async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ApiResponse<AppointmentResponse>>, ApiError> {
    let request = parse_request(&body).map_err(|e| state.reject(e))?;
    let controller = AppointmentController::new(state.pool.clone());
    let appointment = controller.update(&id, request).await.map_err(|e| state.reject(e))?;
    Ok(Json(ApiResponse::success(appointment)))
}

async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let controller = AppointmentController::new(state.pool.clone());
    controller.delete(&id).await.map_err(|e| state.reject(e))?;
    Ok(Json(ApiResponse::message("Appointment deleted successfully".to_string())))
}

// PUT/DELETE sobre la colección: falta el id en la ruta
async fn missing_id() -> AppError {
    bad_request_error("Appointment id is required")
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
