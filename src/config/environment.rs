//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor HTTP.

use anyhow::{Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una fuente de variables arbitraria
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<tracing::Level>()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error, got '{}'", raw))?,
            None => defaults.log_level,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT")
                .map(|value| value.trim().to_lowercase())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.environment),
            host: lookup("HOST")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            log_level,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Los detalles de errores internos solo se exponen fuera de producción
    pub fn expose_error_details(&self) -> bool {
        !self.is_production()
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
