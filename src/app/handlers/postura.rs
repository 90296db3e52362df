use crate::api::postura_api::DefinirPosturasRequest;
use crate::app::state::AppState;

use super::common::{error_parametro, map_api_error, parse_fecha, parse_turno};

// ==========================================
// Handlers de posturas
// ==========================================

/// Reemplaza el set de posturas del turno
pub async fn definir_posturas(
    state: &AppState,
    req: DefinirPosturasRequest,
) -> Result<String, String> {
    let api = state.postura_api.clone();
    let result = tokio::task::spawn_blocking(move || api.definir_posturas(&req))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Posturas vigentes de una fecha/turno para cargar el formulario
///
/// Parámetros faltantes → payload 400; fecha o turno no parseables →
/// lista vacía.
pub async fn posturas_actuales(
    state: &AppState,
    fecha: Option<String>,
    turno: Option<String>,
) -> Result<String, String> {
    let (fecha_str, turno_str) = match (fecha, turno) {
        (Some(f), Some(t)) if !f.trim().is_empty() && !t.trim().is_empty() => (f, t),
        _ => return Err(error_parametro("Faltan los parámetros de fecha o turno")),
    };

    let posturas = match (parse_fecha(&fecha_str).ok(), parse_turno(&turno_str)) {
        (Some(fecha), Some(turno)) => {
            let api = state.postura_api.clone();
            tokio::task::spawn_blocking(move || api.posturas_actuales(fecha, turno))
                .await
                .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
                .map_err(map_api_error)?
        }
        _ => Vec::new(),
    };

    serde_json::to_string(&serde_json::json!({ "posturas": posturas }))
        .map_err(|e| format!("Fallo de serialización: {}", e))
}
