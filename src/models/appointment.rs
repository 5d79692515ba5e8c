//! Modelo de Appointment
//!
//! Este módulo contiene el struct Appointment y los códigos cerrados que
//! acepta la tabla appointments (servicio, estado y período).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Appointment principal - mapea exactamente a la tabla appointments
#[derive(Debug, Clone, FromRow)]
pub struct Appointment {
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

/// Tipo de servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Windshield,
    SideWindow,
    RearWindow,
    Repair,
    Polishing,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Windshield,
        ServiceType::SideWindow,
        ServiceType::RearWindow,
        ServiceType::Repair,
        ServiceType::Polishing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Windshield => "PB",
            ServiceType::SideWindow => "LT",
            ServiceType::RearWindow => "OC",
            ServiceType::Repair => "REP",
            ServiceType::Polishing => "POL",
        }
    }
}

/// Estado de la cita. No hay transiciones: cualquier estado se puede fijar directamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    #[default]
    New,
    GlassOrdered,
    InStock,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::New,
        AppointmentStatus::GlassOrdered,
        AppointmentStatus::InStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::New => "NE",
            AppointmentStatus::GlassOrdered => "VE",
            AppointmentStatus::InStock => "ST",
        }
    }
}

/// Franja horaria de la cita
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Morning, Period::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
        }
    }
}

/// Código desconocido para uno de los enums cerrados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! code_enum_traits {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownCode;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| UnknownCode(value.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

code_enum_traits!(ServiceType);
code_enum_traits!(AppointmentStatus);
code_enum_traits!(Period);

/// Lista legible de los códigos permitidos, para mensajes de validación
pub fn allowed_codes<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes_round_trip() {
        for code in ["PB", "LT", "OC", "REP", "POL"] {
            let service: ServiceType = code.parse().unwrap();
            assert_eq!(service.as_str(), code);
        }
        assert!("XX".parse::<ServiceType>().is_err());
        assert!("pb".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_default_status_is_new() {
        assert_eq!(AppointmentStatus::default().as_str(), "NE");
        assert_eq!("ST".parse::<AppointmentStatus>(), Ok(AppointmentStatus::InStock));
    }

    #[test]
    fn test_period_values() {
        assert_eq!("Morning".parse::<Period>(), Ok(Period::Morning));
        assert!("Evening".parse::<Period>().is_err());
        assert_eq!(allowed_codes(&Period::ALL), "Morning, Afternoon");
    }
}
