//! DTOs de la API
//!
//! Payloads de entrada, respuestas de entidades y el envelope JSON común.

pub mod api_response;
pub mod appointment_dto;

pub use api_response::{ApiResponse, ErrorDetails};
pub use appointment_dto::{AppointmentFields, AppointmentRequest, AppointmentResponse};
