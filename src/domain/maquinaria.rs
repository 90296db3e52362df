// ==========================================
// Sistema de Gestión de Flota - Maquinaria
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::CategoriaEquipo;

// ==========================================
// Maquinaria - equipo de la flota
// ==========================================
// El horómetro acumula minutos de operación. horometro_actual guarda la
// última lectura conocida y sirve de fallback cuando el equipo no tiene
// movimientos registrados.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maquinaria {
    pub id: i64,
    pub codigo_eq: String,       // Código de equipo, único (ej: "CF-03")
    pub marca: String,
    pub modelo: String,
    pub tipo: String,            // Ej: "Excavadora", "Camión Tolva"
    pub patente: Option<String>,
    pub horometro_actual: u32,   // Última lectura conocida (minutos)
}

impl Maquinaria {
    /// Categoría para el informe de producción (None = no participa)
    pub fn categoria(&self) -> Option<CategoriaEquipo> {
        CategoriaEquipo::desde_tipo(&self.tipo)
    }
}

// ==========================================
// MaquinariaNueva - alta de equipo
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaquinariaNueva {
    pub codigo_eq: String,
    pub marca: String,
    pub modelo: String,
    pub tipo: String,
    pub patente: Option<String>,
    pub horometro_actual: u32,
}
