//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión al envelope JSON de la API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::api_response::{ApiResponse, ErrorDetails};
use crate::dto::appointment_dto::FIELD_ORDER;
use crate::utils::validation::error_messages;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::MalformedBody(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Construir la respuesta HTTP.
    ///
    /// Con `expose_details = false` el detalle de los errores internos no
    /// sale del servidor; solo queda en el log.
    pub fn into_envelope(self, expose_details: bool) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(errors) => {
                let messages = error_messages(&errors, &FIELD_ORDER);
                warn!("⚠️ Validación fallida: {}", messages.join("; "));
                ApiResponse::error(
                    "Validation failed".to_string(),
                    Some(ErrorDetails::List(messages)),
                )
            }
            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                ApiResponse::error(msg, None)
            }
            AppError::NotFound(msg) => ApiResponse::error(msg, None),
            AppError::MethodNotAllowed => ApiResponse::error("Method not allowed".to_string(), None),
            internal => {
                let detail = internal.to_string();
                error!("❌ {}", detail);
                ApiResponse::error(
                    "Internal server error".to_string(),
                    expose_details.then_some(ErrorDetails::Text(detail)),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_envelope(false)
    }
}

/// Error listo para responder, con la política de exposición del entorno
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    expose_details: bool,
}

impl ApiError {
    pub fn new(error: AppError, expose_details: bool) -> Self {
        Self { error, expose_details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.error.into_envelope(self.expose_details)
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
