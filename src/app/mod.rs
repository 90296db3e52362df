// ==========================================
// Sistema de Gestión de Flota - Capa de aplicación
// ==========================================
// Responsabilidad: cableado del estado y handlers para la superficie
// HTTP externa.
// ==========================================

pub mod handlers;
pub mod state;

// Reexportaciones
pub use state::AppState;
