// ==========================================
// Sistema de Gestión de Flota - Biblioteca principal
// ==========================================
// Gestión de operaciones mineras: personal, flota, movimientos
// diarios, posturas e informes de producción por turno.
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y tipos
pub mod domain;

// Capa de repositorios - acceso a datos
pub mod repository;

// Capa de reglas - validación y agregación
pub mod engine;

// Capa API - casos de uso
pub mod api;

// Renderizado de documentos (costura con el motor externo)
pub mod report;

// Configuración
pub mod config;

// Infraestructura de base de datos (conexión/PRAGMA/schema)
pub mod db;

// Sistema de logs
pub mod logging;

// Capa de aplicación - estado y handlers
pub mod app;

// ==========================================
// Reexportación de tipos principales
// ==========================================

// Tipos de dominio
pub use domain::types::{
    CategoriaEquipo, CodigoLugar, CodigoMaterial, EmpresaSupervisor, Faena, NivelCombustible,
    OrigenCombustible, TipoActividad, Turno,
};

// Entidades
pub use domain::{
    Cliente, Empleado, InformeDiario, Maquinaria, Movimiento, Postura, ProduccionEquipo,
    Proyecto, Supervisor, Viaje,
};

// Reglas
pub use engine::{
    agrupar_produccion, validar_movimiento, validar_postura, validar_viaje, ErroresCampo,
    MovimientoFormulario, PosturaFormulario, ResumenProduccion, ViajeFormulario,
};

// APIs
pub use api::{EmpleadoApi, MovimientoApi, PosturaApi, ProduccionApi};

// Aplicación
pub use app::AppState;

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre del sistema
pub const APP_NAME: &str = "Sistema de Gestión de Flota";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
