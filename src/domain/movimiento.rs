// ==========================================
// Sistema de Gestión de Flota - Movimientos diarios
// ==========================================
// Un movimiento es el registro de turno de un operador sobre un equipo
// en una fecha. El horómetro se mide en minutos acumulados; las horas
// trabajadas se derivan de la diferencia de lecturas.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Faena, NivelCombustible, OrigenCombustible, Turno};

// ==========================================
// Movimiento - registro empleado/equipo/turno
// ==========================================
// Invariante (validado en engine::movimiento_rules): si hay lectura
// final, final > inicial y (final - inicial) <= 720 minutos;
// horas_trabajadas = (final - inicial) / 60 redondeado a 2 decimales.
// Un turno abierto (sin lectura final) queda con horas en NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movimiento {
    pub id: i64,
    pub fecha: NaiveDate,
    pub empleado_id: Option<i64>,   // FK empleado (set-null al eliminar)
    pub maquinaria_id: Option<i64>, // FK maquinaria (set-null al eliminar)
    pub faena: Faena,
    pub turno: Turno,
    pub descripcion_trabajo_especial: Option<String>,

    // ===== Horómetro =====
    pub horometro_inicial: u32,          // Lectura al inicio del turno (minutos)
    pub horometro_final: Option<u32>,    // NULL = turno abierto
    pub horas_trabajadas: Option<f64>,   // Derivado, 2 decimales

    // ===== Combustible =====
    pub combustible_cargado: Option<f64>,        // Litros
    pub origen_combustible: Option<OrigenCombustible>,
    pub detalle_chip_otro_equipo: Option<String>, // Código o patente del otro equipo
    pub nivel_inicial_combustible: Option<NivelCombustible>,
    pub nivel_final_combustible: NivelCombustible,

    pub observaciones: Option<String>,
}

// ==========================================
// MovimientoNuevo - registro validado listo para persistir
// ==========================================
// Salida de engine::movimiento_rules::validar_movimiento. Mismos campos
// que Movimiento sin id; empleado y maquinaria son obligatorios al
// crear (el set-null solo ocurre al eliminar el padre).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovimientoNuevo {
    pub fecha: NaiveDate,
    pub empleado_id: i64,
    pub maquinaria_id: i64,
    pub faena: Faena,
    pub turno: Turno,
    pub descripcion_trabajo_especial: Option<String>,
    pub horometro_inicial: u32,
    pub horometro_final: Option<u32>,
    pub horas_trabajadas: Option<f64>,
    pub combustible_cargado: Option<f64>,
    pub origen_combustible: Option<OrigenCombustible>,
    pub detalle_chip_otro_equipo: Option<String>,
    pub nivel_inicial_combustible: Option<NivelCombustible>,
    pub nivel_final_combustible: NivelCombustible,
    pub observaciones: Option<String>,
}

// ==========================================
// Viaje - cargas realizadas contra una postura
// ==========================================
// A lo más un Viaje por par (movimiento, postura).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viaje {
    pub id: i64,
    pub movimiento_id: i64, // FK movimiento (cascade)
    pub postura_id: i64,    // FK postura (cascade)
    pub cantidad: u32,      // Número de viajes realizados
}

// ==========================================
// ViajeNuevo - viaje validado listo para persistir
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViajeNuevo {
    pub postura_id: i64,
    pub cantidad: u32,
}

// ==========================================
// EstadisticasMovimiento - agregado por equipo/turno
// ==========================================
// Salida de la consulta de agregación del informe de producción:
// min/max de horómetro y sumas de horas y combustible sobre todos los
// movimientos de un equipo en una fecha/turno.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticasMovimiento {
    pub maquinaria_id: i64,
    pub hora_inicio: Option<u32>,       // MIN(horometro_inicial)
    pub hora_termino: Option<u32>,      // MAX(horometro_final)
    pub total_horas: Option<f64>,       // SUM(horas_trabajadas)
    pub total_combustible: Option<f64>, // SUM(combustible_cargado)
}
