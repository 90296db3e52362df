// ==========================================
// Sistema de Gestión de Flota - Capa API
// ==========================================
// Casos de uso del sistema: orquestan engine/ (reglas puras) sobre
// repository/ (acceso a datos). La superficie HTTP externa consume
// estas APIs a través de app/handlers.
// ==========================================

pub mod empleado_api;
pub mod error;
pub mod movimiento_api;
pub mod postura_api;
pub mod produccion_api;

// Reexportaciones
pub use empleado_api::{EmpleadoApi, FichaEmpleado};
pub use error::{ApiError, ApiResult};
pub use movimiento_api::{
    CrearMovimientoRequest, CrearMovimientoResultado, FilaReporteDiario, MovimientoApi,
    OpcionPostura, ReporteDiario,
};
pub use postura_api::{DefinirPosturasRequest, DefinirPosturasResultado, PosturaApi};
pub use produccion_api::{EntradaProduccion, InformeProduccionContexto, ProduccionApi};
