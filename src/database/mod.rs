//! Módulo de base de datos
//!
//! Maneja la conexión y operaciones con PostgreSQL

pub mod connection;

pub use connection::{acquire, mask_database_url, DatabaseConnection};
