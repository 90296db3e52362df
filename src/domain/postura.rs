// ==========================================
// Sistema de Gestión de Flota - Posturas
// ==========================================
// Una postura es una asignación numerada de movimiento de material
// (origen → destino) dentro del informe de un turno.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{CodigoLugar, CodigoMaterial, TipoActividad};

// ==========================================
// Postura - asignación de movimiento de material
// ==========================================
// Unicidad: (informe, numero_postura). El set completo del turno se
// reemplaza al guardar, renumerando 1..N (ver api::postura_api).
// El descriptor de sector solo es obligatorio para orígenes de mina.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Postura {
    pub id: i64,
    pub informe_id: i64,          // FK informe_diario (cascade)
    pub numero_postura: u32,      // Correlativo 1..N dentro del turno
    pub tipo_actividad: TipoActividad,
    pub origen: CodigoLugar,

    // ===== Descriptor de sector (solo orígenes de mina) =====
    pub sector_prefijo: Option<String>, // Ej: "TA"
    pub sector_banco: Option<String>,   // Ej: "610"
    pub sector_tiro: Option<String>,    // Ej: "23"

    pub destino: CodigoLugar,
    pub material: CodigoMaterial,
}

impl Postura {
    /// Descripción para listas de selección del formulario de movimientos
    ///
    /// Formato: "Postura #N: actividad - origen a destino"
    pub fn descripcion(&self) -> String {
        format!(
            "Postura #{}: {} - {} a {}",
            self.numero_postura, self.tipo_actividad, self.origen, self.destino
        )
    }
}

// ==========================================
// PosturaNueva - fila validada lista para persistir
// ==========================================
// Salida de engine::postura_rules::validar_postura. El informe y el
// correlativo se asignan al reemplazar el set completo del turno.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosturaNueva {
    pub tipo_actividad: TipoActividad,
    pub origen: CodigoLugar,
    pub sector_prefijo: Option<String>,
    pub sector_banco: Option<String>,
    pub sector_tiro: Option<String>,
    pub destino: CodigoLugar,
    pub material: CodigoMaterial,
}
