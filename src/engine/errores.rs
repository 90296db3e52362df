// ==========================================
// Sistema de Gestión de Flota - Errores de campo
// ==========================================
// Resultado de validación de formularios: mapa campo → lista de
// mensajes. Los mensajes se acumulan, no se corta en el primero.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errores de validación con alcance de campo
///
/// El mapa va ordenado por nombre de campo para que la salida sea
/// estable entre ejecuciones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErroresCampo {
    errores: BTreeMap<String, Vec<String>>,
}

impl ErroresCampo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un mensaje al campo indicado
    pub fn agregar(&mut self, campo: &str, mensaje: impl Into<String>) {
        self.errores
            .entry(campo.to_string())
            .or_default()
            .push(mensaje.into());
    }

    pub fn esta_vacio(&self) -> bool {
        self.errores.is_empty()
    }

    pub fn contiene(&self, campo: &str) -> bool {
        self.errores.contains_key(campo)
    }

    /// Mensajes de un campo (slice vacío si el campo no tiene errores)
    pub fn mensajes(&self, campo: &str) -> &[String] {
        self.errores.get(campo).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total de mensajes acumulados (todos los campos)
    pub fn total(&self) -> usize {
        self.errores.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.errores.iter()
    }
}
