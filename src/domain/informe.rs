// ==========================================
// Sistema de Gestión de Flota - Informe diario de producción
// ==========================================
// El informe diario agrupa, por (fecha, turno), la jefatura del turno,
// las posturas definidas y la producción registrada por equipo.
// Los grupos de producción son registros de forma fija (no mapas
// abiertos): la forma queda verificada en compilación.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmpresaSupervisor, Turno};

// ==========================================
// Supervisor - jefatura de turno
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supervisor {
    pub id: i64,
    pub nombre_completo: String, // único
    pub empresa: EmpresaSupervisor,
}

// ==========================================
// InformeDiario - cabecera por (fecha, turno)
// ==========================================
// Unicidad: (fecha, turno). Se crea bajo demanda la primera vez que el
// turno registra posturas o producción.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformeDiario {
    pub id: i64,
    pub fecha: NaiveDate,
    pub turno: Turno,
    pub lider_tirreno_id: Option<i64>, // FK supervisor (set-null)
    pub jefe_mandante_id: Option<i64>, // FK supervisor (set-null)
}

// ==========================================
// DespachoMateriales - cantidades por material
// ==========================================
// Grupo usado tanto para despacho a fábrica como para remanejo/apoyo.
// Los campos son texto libre (la planilla admite anotaciones como
// "12 viajes" o "3.5").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DespachoMateriales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cemento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(rename = "6_15", default, skip_serializing_if = "Option::is_none")]
    pub seis_quince: Option<String>,
    #[serde(rename = "15_50", default, skip_serializing_if = "Option::is_none")]
    pub quince_cincuenta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitumix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fino: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carga_buzon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otro: Option<String>,
}

/// Casillas de la planilla de camión tolva
pub const NUM_CAMPOS_TOLVA: usize = 10;

/// Viajes de la planilla de camión aljibe
pub const NUM_VIAJES_ALJIBE: usize = 4;

// ==========================================
// CamposTolva - planilla de camión tolva (10 casillas)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamposTolva {
    pub campos: [Option<String>; NUM_CAMPOS_TOLVA],
}

impl CamposTolva {
    pub const NUM_CAMPOS: usize = NUM_CAMPOS_TOLVA;

    /// Casillas en orden, con "" donde no hay valor registrado
    pub fn valores(&self) -> Vec<String> {
        self.campos
            .iter()
            .map(|c| c.clone().unwrap_or_default())
            .collect()
    }
}

// ==========================================
// ViajesAljibe - planilla de camión aljibe (4 viajes)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViajesAljibe {
    pub viajes: [Option<String>; NUM_VIAJES_ALJIBE],
}

impl ViajesAljibe {
    pub const NUM_VIAJES: usize = NUM_VIAJES_ALJIBE;

    /// Viajes en orden, con "" donde no hay valor registrado
    pub fn valores(&self) -> Vec<String> {
        self.viajes
            .iter()
            .map(|v| v.clone().unwrap_or_default())
            .collect()
    }
}

// ==========================================
// ProduccionEquipo - producción registrada por equipo
// ==========================================
// Unicidad: (informe, maquinaria). Cada grupo es independiente: al
// guardar solo se sobreescriben los grupos presentes en el envío
// (ver api::produccion_api).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduccionEquipo {
    pub id: i64,
    pub informe_id: i64,    // FK informe_diario (cascade)
    pub maquinaria_id: i64, // FK maquinaria (cascade)
    pub despacho_fabrica: Option<DespachoMateriales>,
    pub remanejo_apoyo: Option<DespachoMateriales>,
    pub camion_tolva: Option<CamposTolva>,
    pub camion_aljibe: Option<ViajesAljibe>,
    pub observaciones: Option<String>,
}

// ==========================================
// SupervisorNuevo - alta de supervisor
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorNuevo {
    pub nombre_completo: String,
    pub empresa: EmpresaSupervisor,
}

// ==========================================
// ProduccionEquipoDatos - envío de producción de un equipo
// ==========================================
// Cada grupo es Option: solo los grupos presentes sobreescriben lo
// guardado; un grupo ausente conserva el valor anterior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProduccionEquipoDatos {
    pub despacho_fabrica: Option<DespachoMateriales>,
    pub remanejo_apoyo: Option<DespachoMateriales>,
    pub camion_tolva: Option<CamposTolva>,
    pub camion_aljibe: Option<ViajesAljibe>,
    pub observaciones: Option<String>,
}

impl ProduccionEquipoDatos {
    /// true si el envío no trae ningún grupo ni observaciones
    pub fn esta_vacio(&self) -> bool {
        self.despacho_fabrica.is_none()
            && self.remanejo_apoyo.is_none()
            && self.camion_tolva.is_none()
            && self.camion_aljibe.is_none()
            && self.observaciones.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_despacho_serializa_solo_presentes() {
        let despacho = DespachoMateriales {
            cemento: Some("12".to_string()),
            seis_quince: Some("3".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&despacho).unwrap();
        assert_eq!(json["cemento"], "12");
        assert_eq!(json["6_15"], "3");
        assert!(json.get("normal").is_none());
    }

    #[test]
    fn test_campos_tolva_con_defecto_vacio() {
        let mut tolva = CamposTolva::default();
        tolva.campos[0] = Some("PCH".to_string());
        tolva.campos[9] = Some("18".to_string());

        let valores = tolva.valores();
        assert_eq!(valores.len(), CamposTolva::NUM_CAMPOS);
        assert_eq!(valores[0], "PCH");
        assert_eq!(valores[1], "");
        assert_eq!(valores[9], "18");
    }

    #[test]
    fn test_viajes_aljibe_largo_fijo() {
        let aljibe = ViajesAljibe::default();
        assert_eq!(aljibe.valores().len(), ViajesAljibe::NUM_VIAJES);
    }
}
