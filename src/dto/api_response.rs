use serde::Serialize;

/// Detalle de un error: lista de violaciones o texto libre
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetails {
    List(Vec<String>),
    Text(String),
}

// Envelope común a todas las respuestas
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: String) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            details: None,
            message: Some(message),
        }
    }

    pub fn error(error: String, details: Option<ErrorDetails>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            details,
            message: None,
        }
    }
}
