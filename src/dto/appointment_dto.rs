use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::models::appointment::{allowed_codes, Appointment, AppointmentStatus, Period, ServiceType};
use crate::utils::validation::{trimmed, validate_code, validate_date, validate_required_text};

/// Orden en el que se reportan los errores de validación
pub const FIELD_ORDER: [&str; 7] = ["plate", "car", "service", "locality", "status", "period", "date"];

const DEFAULT_SORT_INDEX: i32 = 1;

// Payload de creación/actualización tal como llega del cliente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentRequest {
    pub date: Option<String>,
    pub period: Option<String>,
    pub plate: Option<String>,
    pub car: Option<String>,
    pub service: Option<String>,
    pub locality: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub extra: Option<String>,
    #[serde(rename = "sortIndex")]
    pub sort_index: Option<i32>,
    #[serde(rename = "sort_index")]
    pub sort_index_snake: Option<i32>,
}

/// Cita validada y normalizada, lista para escribirse en la tabla
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentFields {
    pub date: Option<NaiveDate>,
    pub period: Option<Period>,
    pub plate: String,
    pub car: String,
    pub service: ServiceType,
    pub locality: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub extra: Option<String>,
    pub sort_index: i32,
}

impl AppointmentRequest {
    /// Validar todas las reglas a la vez y devolver los campos normalizados.
    ///
    /// Los errores se acumulan: un payload sin `plate` ni `service`
    /// produce exactamente dos violaciones.
    pub fn to_fields(&self) -> Result<AppointmentFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let plate = validate_required_text("plate", self.plate.as_deref())
            .map(|plate| plate.to_uppercase())
            .map_err(|e| errors.add("plate", e))
            .ok();
        let car = validate_required_text("car", self.car.as_deref())
            .map_err(|e| errors.add("car", e))
            .ok();
        let service = validate_code::<ServiceType>(
            "service",
            trimmed(self.service.as_deref()).as_deref(),
            &allowed_codes(&ServiceType::ALL),
        )
        .map_err(|e| errors.add("service", e))
        .ok();
        let locality = validate_required_text("locality", self.locality.as_deref())
            .map_err(|e| errors.add("locality", e))
            .ok();

        let status = match trimmed(self.status.as_deref()) {
            None => Some(AppointmentStatus::default()),
            Some(raw) => validate_code::<AppointmentStatus>(
                "status",
                Some(raw.as_str()),
                &allowed_codes(&AppointmentStatus::ALL),
            )
            .map_err(|e| errors.add("status", e))
            .ok(),
        };

        let period = match trimmed(self.period.as_deref()) {
            None => None,
            Some(raw) => validate_code::<Period>("period", Some(raw.as_str()), &allowed_codes(&Period::ALL))
                .map_err(|e| errors.add("period", e))
                .ok(),
        };

        let date = match trimmed(self.date.as_deref()) {
            None => None,
            Some(raw) => validate_date("date", &raw)
                .map_err(|e| errors.add("date", e))
                .ok(),
        };

        match (plate, car, service, locality, status) {
            (Some(plate), Some(car), Some(service), Some(locality), Some(status))
                if errors.errors().is_empty() =>
            {
                Ok(AppointmentFields {
                    date,
                    period,
                    plate,
                    car,
                    service,
                    locality,
                    status,
                    notes: trimmed(self.notes.as_deref()),
                    extra: trimmed(self.extra.as_deref()),
                    sort_index: self
                        .sort_index
                        .or(self.sort_index_snake)
                        .unwrap_or(DEFAULT_SORT_INDEX),
                })
            }
            _ => Err(errors),
        }
    }
}

// Response de cita; los nombres de campo van en camelCase
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub period: Option<String>,
    pub plate: String,
    pub car: String,
    pub service: String,
    pub locality: String,
    pub status: String,
    pub notes: Option<String>,
    pub extra: Option<String>,
    pub sort_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            date: appointment.date,
            period: appointment.period,
            plate: appointment.plate,
            car: appointment.car,
            service: appointment.service,
            locality: appointment.locality,
            status: appointment.status,
            notes: appointment.notes,
            extra: appointment.extra,
            sort_index: appointment.sort_index,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}
