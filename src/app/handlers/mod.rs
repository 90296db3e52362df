// ==========================================
// Sistema de Gestión de Flota - Handlers de la superficie HTTP
// ==========================================
// Funciones async que la superficie HTTP externa enlaza a sus rutas.
// Cada handler valida parámetros, ejecuta la API síncrona en un hilo
// bloqueante y serializa el resultado (o un payload de error).
// ==========================================

mod common;
pub mod empleado;
pub mod movimiento;
pub mod postura;
pub mod produccion;

pub use empleado::{buscar_empleado, certificado_empleado, listar_empleados};
pub use movimiento::{crear_movimiento, obtener_posturas, reporte_diario, ultimo_horometro};
pub use postura::{definir_posturas, posturas_actuales};
pub use produccion::{
    guardar_lideres, guardar_produccion, informe_produccion, informe_produccion_pdf,
};
