//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos. Cada helper devuelve un `ValidationError` con
//! un mensaje legible para que el llamador pueda acumularlos.

use chrono::{DateTime, NaiveDate};
use std::borrow::Cow;
use std::str::FromStr;
use validator::{ValidationError, ValidationErrors};

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// Texto opcional recortado; cadenas vacías o solo espacios se tratan como ausentes
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Validar que un string exista y no esté vacío tras recortarlo
pub fn validate_required_text(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    trimmed(value).ok_or_else(|| violation("required", format!("{} is required", field)))
}

/// Validar que un valor esté en una lista de códigos permitidos
pub fn validate_code<T>(field: &str, value: Option<&str>, allowed: &str) -> Result<T, ValidationError>
where
    T: FromStr,
{
    let Some(raw) = value else {
        return Err(violation("required", format!("{} is required", field)));
    };
    raw.parse::<T>().map_err(|_| {
        let mut error = violation("enum", format!("{} must be one of: {}", field, allowed));
        error.add_param("value".into(), &raw.to_string());
        error
    })
}

/// Validar y convertir string a fecha.
///
/// Acepta `YYYY-MM-DD` y, por compatibilidad con clientes que envían
/// timestamps completos, un datetime RFC 3339 del que se toma la fecha.
pub fn validate_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            let mut error = violation(
                "date",
                format!("{} must be a valid date in YYYY-MM-DD format", field),
            );
            error.add_param("value".into(), &value.to_string());
            error
        })
}

/// Mensajes de todos los errores acumulados, en el orden de campos indicado
pub fn error_messages(errors: &ValidationErrors, field_order: &[&'static str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&'static str> = field_errors.keys().copied().collect();
    fields.sort_by_key(|field| {
        field_order
            .iter()
            .position(|known| known == field)
            .unwrap_or(field_order.len())
    });

    fields
        .into_iter()
        .flat_map(|field| {
            field_errors[field].iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceType;

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed(Some("  hola ")), Some("hola".to_string()));
        assert_eq!(trimmed(Some("   ")), None);
        assert_eq!(trimmed(None), None);
    }

    #[test]
    fn test_validate_required_text() {
        assert_eq!(validate_required_text("car", Some(" Golf ")).unwrap(), "Golf");
        let error = validate_required_text("car", Some("  ")).unwrap_err();
        assert_eq!(error.message.as_deref(), Some("car is required"));
        assert!(validate_required_text("car", None).is_err());
    }

    #[test]
    fn test_validate_code() {
        let service: ServiceType = validate_code("service", Some("REP"), "PB, LT").unwrap();
        assert_eq!(service, ServiceType::Repair);

        let error = validate_code::<ServiceType>("service", Some("XYZ"), "PB, LT").unwrap_err();
        assert_eq!(error.code, "enum");
        assert_eq!(error.message.as_deref(), Some("service must be one of: PB, LT"));

        let error = validate_code::<ServiceType>("service", None, "PB, LT").unwrap_err();
        assert_eq!(error.code, "required");
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("date", "2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            validate_date("date", "2024-01-15T00:00:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(validate_date("date", "2024/01/15").is_err());
        assert!(validate_date("date", "2024-02-30").is_err());
    }

    #[test]
    fn test_error_messages_follow_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("service", violation("required", "service is required".to_string()));
        errors.add("plate", violation("required", "plate is required".to_string()));

        let messages = error_messages(&errors, &["plate", "service"]);
        assert_eq!(messages, vec!["plate is required", "service is required"]);
    }
}
