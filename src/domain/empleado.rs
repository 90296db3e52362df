// ==========================================
// Sistema de Gestión de Flota - Empleados
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TipoLicencia - clase de licencia de conducir
// ==========================================
// Ej: "Clase B", "Clase D". Relación muchos-a-muchos con Empleado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoLicencia {
    pub id: i64,
    pub nombre: String, // único
}

// ==========================================
// Empleado - trabajador de la empresa
// ==========================================
// cargo y tipo_contrato se registran como texto; el formulario de
// ingreso restringe los valores, no el modelo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empleado {
    pub id: i64,

    // ===== Identificación =====
    pub codigo_trabajador: String, // Código interno de 4 dígitos, único
    pub nombre_completo: String,
    pub rut: String,               // único

    // ===== Contrato =====
    pub cargo: String,             // Ej: "Operador Maquinaria", "Jefe de Turno"
    pub tipo_contrato: String,     // "Indefinido" / "Plazo Fijo"
    pub fecha_contratacion: NaiveDate,
    pub fecha_termino_contrato: Option<NaiveDate>,

    // ===== Licencias =====
    pub licencias: Vec<TipoLicencia>,
    pub fecha_vencimiento_licencia: Option<NaiveDate>,

    pub fecha_nacimiento: Option<NaiveDate>,
}

// ==========================================
// EmpleadoNuevo - alta de empleado
// ==========================================
// Las licencias se asocian por separado (tabla de unión).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpleadoNuevo {
    pub codigo_trabajador: String,
    pub nombre_completo: String,
    pub rut: String,
    pub cargo: String,
    pub tipo_contrato: String,
    pub fecha_contratacion: NaiveDate,
    pub fecha_termino_contrato: Option<NaiveDate>,
    pub fecha_vencimiento_licencia: Option<NaiveDate>,
    pub fecha_nacimiento: Option<NaiveDate>,
}
