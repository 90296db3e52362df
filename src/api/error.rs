// ==========================================
// Sistema de Gestión de Flota - Errores de la capa API
// ==========================================
// Responsabilidad: traducir errores técnicos del repositorio a errores
// de negocio con mensaje explícito para el usuario.
// Herramienta: macro derive de thiserror
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Errores de la capa API
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Errores de negocio =====
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Recurso no encontrado: {0}")]
    NotFound(String),

    #[error("Regla de negocio violada: {0}")]
    BusinessRuleViolation(String),

    #[error("Datos inválidos: {0}")]
    ValidationError(String),

    // ===== Errores de acceso a datos =====
    #[error("Error de base de datos: {0}")]
    DatabaseError(String),

    #[error("Fallo de conexión a la base de datos: {0}")]
    DatabaseConnectionError(String),

    #[error("Fallo de transacción: {0}")]
    DatabaseTransactionError(String),

    // ===== Renderizado =====
    #[error("Fallo de renderizado: {0}")]
    RenderError(String),

    // ===== Errores genéricos =====
    #[error("Error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversión desde RepositoryError
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) no existe", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => ApiError::DatabaseConnectionError(format!(
                "no se pudo obtener el lock de la base: {}",
                msg
            )),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("restricción única violada: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("clave foránea violada: {}", msg))
            }
            RepositoryError::BusinessRuleViolation(msg) => ApiError::BusinessRuleViolation(msg),
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("campo {}: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Alias de Result para la capa API
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_not_found() {
        let repo_err = RepositoryError::NotFound {
            entity: "empleado".to_string(),
            id: "42".to_string(),
        };
        match ApiError::from(repo_err) {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("empleado"));
                assert!(msg.contains("42"));
            }
            other => panic!("Se esperaba NotFound, se obtuvo {:?}", other),
        }
    }

    #[test]
    fn test_conversion_restriccion_unica() {
        let repo_err = RepositoryError::UniqueConstraintViolation(
            "UNIQUE constraint failed: informe_diario.fecha".to_string(),
        );
        match ApiError::from(repo_err) {
            ApiError::BusinessRuleViolation(msg) => assert!(msg.contains("informe_diario")),
            other => panic!("Se esperaba BusinessRuleViolation, se obtuvo {:?}", other),
        }
    }
}
