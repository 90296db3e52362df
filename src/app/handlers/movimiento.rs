use chrono::Local;

use crate::api::movimiento_api::CrearMovimientoRequest;
use crate::app::state::AppState;

use super::common::{error_parametro, map_api_error, parse_fecha, parse_turno};

// ==========================================
// Handlers de movimientos
// ==========================================

/// Alta de movimiento con sus viajes
///
/// El resultado serializado distingue "guardado" de "rechazado"; el
/// rechazo trae los errores por campo y las posturas vigentes para
/// re-renderizar el formulario.
pub async fn crear_movimiento(
    state: &AppState,
    req: CrearMovimientoRequest,
) -> Result<String, String> {
    let api = state.movimiento_api.clone();
    let result = tokio::task::spawn_blocking(move || api.crear_movimiento(&req))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Última lectura de horómetro de un equipo
///
/// Degrada con gracia: equipo sin movimientos → horómetro almacenado;
/// equipo inexistente → 0.
pub async fn ultimo_horometro(
    state: &AppState,
    maquinaria_id: Option<i64>,
) -> Result<String, String> {
    let maquinaria_id = match maquinaria_id {
        Some(id) => id,
        None => return Err(error_parametro("ID de maquinaria no proporcionado")),
    };

    let api = state.movimiento_api.clone();
    let result = tokio::task::spawn_blocking(move || api.ultimo_horometro(maquinaria_id))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&serde_json::json!({ "ultimo_horometro": result }))
        .map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Posturas del turno como opciones de selección (JSON)
///
/// Parámetros faltantes → payload 400; fecha o turno no parseables →
/// lista vacía (el formulario simplemente no ofrece opciones).
pub async fn obtener_posturas(
    state: &AppState,
    fecha: Option<String>,
    turno: Option<String>,
) -> Result<String, String> {
    let (fecha_str, turno_str) = match (fecha, turno) {
        (Some(f), Some(t)) if !f.trim().is_empty() && !t.trim().is_empty() => (f, t),
        _ => return Err(error_parametro("Faltan los parámetros de fecha o turno")),
    };

    let opciones = match (parse_fecha(&fecha_str).ok(), parse_turno(&turno_str)) {
        (Some(fecha), Some(turno)) => {
            let api = state.movimiento_api.clone();
            tokio::task::spawn_blocking(move || api.posturas_del_turno(fecha, turno))
                .await
                .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
                .map_err(map_api_error)?
        }
        _ => Vec::new(),
    };

    serde_json::to_string(&serde_json::json!({ "posturas": opciones }))
        .map_err(|e| format!("Fallo de serialización: {}", e))
}

/// Reporte diario de movimientos (fecha opcional, por defecto hoy)
///
/// Una fecha no parseable es un error: aquí la fecha es un valor
/// requerido del cálculo, no un filtro de lectura.
pub async fn reporte_diario(
    state: &AppState,
    fecha: Option<String>,
) -> Result<String, String> {
    let fecha = match fecha.filter(|f| !f.trim().is_empty()) {
        Some(f) => parse_fecha(&f)?,
        None => Local::now().date_naive(),
    };

    let api = state.movimiento_api.clone();
    let result = tokio::task::spawn_blocking(move || api.reporte_diario(fecha))
        .await
        .map_err(|e| format!("Fallo de ejecución de tarea: {}", e))?
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("Fallo de serialización: {}", e))
}
