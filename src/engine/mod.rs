// ==========================================
// Sistema de Gestión de Flota - Capa de reglas de negocio
// ==========================================
// Funciones puras: validación de formularios y agregación del informe
// de producción. El acceso a datos queda en repository/ y la
// orquestación en api/.
// ==========================================

pub mod errores;
pub mod movimiento_rules;
pub mod postura_rules;
pub mod produccion;

// Reexportaciones
pub use errores::ErroresCampo;
pub use movimiento_rules::{
    validar_movimiento, validar_viaje, MovimientoFormulario, ViajeFormulario,
};
pub use postura_rules::{validar_postura, PosturaFormulario};
pub use produccion::{
    agrupar_produccion, Casilla, FichaCamionAljibe, FichaCamionTolva, FichaEquipoPesado,
    ResumenProduccion,
};
