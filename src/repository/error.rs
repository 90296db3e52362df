// ==========================================
// Sistema de Gestión de Flota - Errores de la capa de datos
// ==========================================
// Herramienta: macro derive de thiserror
// ==========================================

use thiserror::Error;

/// Errores de la capa de repositorios
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Errores de base de datos =====
    #[error("Registro no encontrado: {entity} con id={id}")]
    NotFound { entity: String, id: String },

    #[error("Fallo de conexión a la base de datos: {0}")]
    DatabaseConnectionError(String),

    #[error("No se pudo obtener el lock de la base de datos: {0}")]
    LockError(String),

    #[error("Fallo de transacción: {0}")]
    DatabaseTransactionError(String),

    #[error("Fallo de consulta: {0}")]
    DatabaseQueryError(String),

    #[error("Violación de restricción única: {0}")]
    UniqueConstraintViolation(String),

    #[error("Violación de clave foránea: {0}")]
    ForeignKeyViolation(String),

    // ===== Errores de reglas de negocio =====
    #[error("Regla de negocio violada: {0}")]
    BusinessRuleViolation(String),

    // ===== Errores de calidad de datos =====
    #[error("Validación de datos fallida: {0}")]
    ValidationError(String),

    #[error("Valor de campo inválido (campo={field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== Errores genéricos =====
    #[error("Error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "registro".to_string(),
                id: "desconocido".to_string(),
            },
            other => RepositoryError::DatabaseQueryError(other.to_string()),
        }
    }
}

/// Alias de Result para la capa de repositorios
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_desde_rusqlite() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(19),
            Some("UNIQUE constraint failed: empleado.rut".to_string()),
        );
        match RepositoryError::from(err) {
            RepositoryError::UniqueConstraintViolation(msg) => {
                assert!(msg.contains("empleado.rut"));
            }
            other => panic!("Se esperaba UniqueConstraintViolation, se obtuvo {:?}", other),
        }
    }
}
