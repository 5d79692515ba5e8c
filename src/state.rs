//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable: solo el pool y la
//! configuración.

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{ApiError, AppError};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<EnvironmentConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Convertir un error en respuesta según la política del entorno
    pub fn reject(&self, error: AppError) -> ApiError {
        ApiError::new(error, self.config.expose_error_details())
    }
}
