//! Service Appointments - API de citas de servicio de vehículos
//!
//! Un único recurso CRUD (`/appointments`) sobre la tabla `appointments`
//! de PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
