use crate::app::state::AppState;
use crate::report::DocumentoPdf;

use super::common::{error_parametro, map_api_error};

// ==========================================
// Handlers de empleados
// ==========================================

/// Listado del personal
pub async fn listar_empleados(state: &AppState) -> Result<String, String> {
    let api = state.empleado_api.clone();
    let result = tokio::task::spawn_blocking(move || api.listar_empleados())
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Búsqueda de empleado por código de trabajador
///
/// Sin código → payload 400; código inexistente → payload 404.
pub async fn buscar_empleado(
    state: &AppState,
    codigo: Option<String>,
) -> Result<String, String> {
    let codigo = match codigo.filter(|c| !c.trim().is_empty()) {
        Some(c) => c,
        None => return Err(error_parametro("Código de trabajador no proporcionado")),
    };

    let api = state.empleado_api.clone();
    let result = tokio::task::spawn_blocking(move || api.buscar_por_codigo(&codigo))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Certificado laboral en PDF, descargable
pub async fn certificado_empleado(
    state: &AppState,
    empleado_id: i64,
) -> Result<DocumentoPdf, String> {
    let api = state.empleado_api.clone();
    tokio::task::spawn_blocking(move || api.certificado(empleado_id))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)
}
