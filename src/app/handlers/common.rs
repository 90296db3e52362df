use crate::api::error::ApiError;
use crate::domain::types::Turno;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Utilidades comunes: mapeo de errores y parseo de parámetros
// ==========================================

/// Respuesta de error (devuelta a la superficie HTTP)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// Código de error
    pub code: String,

    /// Mensaje de error
    pub message: String,

    /// Detalle adicional (opcional)
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub(super) fn a_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// Convierte un ApiError en un payload JSON de error
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "ENTRADA_INVALIDA",
            ApiError::NotFound(_) => "NO_ENCONTRADO",
            ApiError::BusinessRuleViolation(_) => "REGLA_NEGOCIO_VIOLADA",
            ApiError::ValidationError(_) => "DATOS_INVALIDOS",
            ApiError::DatabaseError(_) => "ERROR_BASE_DATOS",
            ApiError::DatabaseConnectionError(_) => "ERROR_CONEXION_BASE_DATOS",
            ApiError::DatabaseTransactionError(_) => "ERROR_TRANSACCION",
            ApiError::RenderError(_) => "ERROR_RENDERIZADO",
            ApiError::InternalError(_) => "ERROR_INTERNO",
            ApiError::Other(_) => "OTRO_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: None,
    };

    error_response.a_json()
}

/// Payload de error 400 por parámetro faltante
pub(super) fn error_parametro(mensaje: &str) -> String {
    ErrorResponse {
        code: "PARAMETRO_FALTANTE".to_string(),
        message: mensaje.to_string(),
        details: None,
    }
    .a_json()
}

/// Payload de error por fecha no parseable
pub(super) fn error_fecha(valor: &str) -> String {
    ErrorResponse {
        code: "FECHA_INVALIDA".to_string(),
        message: format!("Fecha inválida (se espera AAAA-MM-DD): {}", valor),
        details: None,
    }
    .a_json()
}

/// Parsea una fecha ISO (AAAA-MM-DD)
pub(super) fn parse_fecha(fecha_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(fecha_str, "%Y-%m-%d").map_err(|_| error_fecha(fecha_str))
}

/// Parsea un turno por su texto de base ("Día", "Noche", ...)
pub(super) fn parse_turno(turno_str: &str) -> Option<Turno> {
    Turno::from_db_str(turno_str)
}
