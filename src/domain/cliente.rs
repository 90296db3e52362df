// ==========================================
// Sistema de Gestión de Flota - Clientes y proyectos
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Cliente - empresa o persona mandante
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,            // Nombre de la empresa o persona
    pub rut: String,               // RUT (ej: 76.123.456-7), único
    pub direccion: Option<String>, // Dirección física
    pub telefono: Option<String>,
    pub email: Option<String>,     // Correo de contacto
}

// ==========================================
// Proyecto - obra contratada por un cliente
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proyecto {
    pub id: i64,
    pub nombre: String,                  // Nombre de la obra
    pub cliente_id: i64,                 // FK cliente (cascade)
    pub ubicacion: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: Option<NaiveDate>, // NULL = proyecto vigente
}

// ==========================================
// Altas
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteNuevo {
    pub nombre: String,
    pub rut: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProyectoNuevo {
    pub nombre: String,
    pub cliente_id: i64,
    pub ubicacion: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_termino: Option<NaiveDate>,
}
