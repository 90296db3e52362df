use chrono::Local;

use crate::api::produccion_api::EntradaProduccion;
use crate::app::state::AppState;
use crate::domain::types::Turno;
use crate::report::DocumentoPdf;

use super::common::{error_parametro, map_api_error, parse_fecha, parse_turno};

// ==========================================
// Handlers del informe de producción
// ==========================================

/// Vista del informe de producción (fecha/turno opcionales; por
/// defecto hoy, turno Día)
pub async fn informe_produccion(
    state: &AppState,
    fecha: Option<String>,
    turno: Option<String>,
) -> Result<String, String> {
    let fecha = match fecha.filter(|f| !f.trim().is_empty()) {
        Some(f) => parse_fecha(&f)?,
        None => Local::now().date_naive(),
    };
    let turno = turno
        .as_deref()
        .and_then(parse_turno)
        .unwrap_or(Turno::Dia);

    let api = state.produccion_api.clone();
    let result = tokio::task::spawn_blocking(move || api.informe_produccion(fecha, turno))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Guarda la jefatura del turno
pub async fn guardar_lideres(
    state: &AppState,
    fecha: String,
    turno: String,
    lider_tirreno_id: Option<i64>,
    jefe_mandante_id: Option<i64>,
) -> Result<String, String> {
    let fecha = parse_fecha(&fecha)?;
    let turno = match parse_turno(&turno) {
        Some(t) => t,
        None => return Err(error_parametro("Turno no válido")),
    };

    let api = state.produccion_api.clone();
    let result = tokio::task::spawn_blocking(move || {
        api.guardar_lideres(fecha, turno, lider_tirreno_id, jefe_mandante_id)
    })
    .await
    .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&serde_json::json!({
        "informe": result,
        "mensaje": "Líderes de turno guardados con éxito.",
    }))
    .map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Guarda la producción enviada por equipo
pub async fn guardar_produccion(
    state: &AppState,
    fecha: String,
    turno: String,
    entradas: Vec<EntradaProduccion>,
) -> Result<String, String> {
    let fecha = parse_fecha(&fecha)?;
    let turno = match parse_turno(&turno) {
        Some(t) => t,
        None => return Err(error_parametro("Turno no válido")),
    };

    let api = state.produccion_api.clone();
    let guardados =
        tokio::task::spawn_blocking(move || api.guardar_produccion(fecha, turno, &entradas))
            .await
            .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
            .map_err(map_api_error)?;

    serde_json::to_string(&serde_json::json!({
        "equipos_guardados": guardados,
        "mensaje": "¡Informe de producción guardado con éxito!",
    }))
    .map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Exportación del informe de producción a PDF, descargable
pub async fn informe_produccion_pdf(
    state: &AppState,
    fecha: String,
    turno: String,
) -> Result<DocumentoPdf, String> {
    let fecha = parse_fecha(&fecha)?;
    let turno = match parse_turno(&turno) {
        Some(t) => t,
        None => return Err(error_parametro("Turno no válido")),
    };

    let api = state.produccion_api.clone();
    tokio::task::spawn_blocking(move || api.contexto_pdf(fecha, turno))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)
}
