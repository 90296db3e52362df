// ==========================================
// Sistema de Gestión de Flota - Configuración
// ==========================================
// Responsabilidad: resolver la configuración de la aplicación
// (ruta de base de datos) desde variables de entorno, con un
// valor por defecto en el directorio de datos de la plataforma
// ==========================================

use std::path::PathBuf;

/// Variable de entorno que fija la ruta de la base de datos
pub const ENV_DB_PATH: &str = "GESTION_FLOTA_DB";

/// Configuración de la aplicación
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Ruta del archivo SQLite
    pub db_path: String,
}

impl AppConfig {
    /// Carga la configuración desde el entorno
    ///
    /// # Retorna
    /// - AppConfig con la ruta de `GESTION_FLOTA_DB` si está definida,
    ///   o la ruta por defecto de la plataforma en caso contrario
    pub fn from_env() -> Self {
        let db_path = std::env::var(ENV_DB_PATH).unwrap_or_else(|_| default_db_path());
        Self { db_path }
    }
}

/// Ruta por defecto de la base de datos
///
/// `<data_dir>/gestion-flota/flota.db`, con fallback al directorio
/// actual si la plataforma no expone un directorio de datos.
pub fn default_db_path() -> String {
    let mut base: PathBuf = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("gestion-flota");
    if let Err(e) = std::fs::create_dir_all(&base) {
        tracing::warn!("No se pudo crear el directorio de datos {:?}: {}", base, e);
    }
    base.push("flota.db");
    base.to_string_lossy().to_string()
}
