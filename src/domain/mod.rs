// ==========================================
// Sistema de Gestión de Flota - Capa de dominio
// ==========================================
// Entidades y tipos del negocio. Sin acceso a datos ni reglas de
// formulario (eso vive en repository/ y engine/).
// ==========================================

pub mod cliente;
pub mod empleado;
pub mod informe;
pub mod maquinaria;
pub mod movimiento;
pub mod postura;
pub mod types;

// Reexportaciones
pub use cliente::{Cliente, ClienteNuevo, Proyecto, ProyectoNuevo};
pub use empleado::{Empleado, EmpleadoNuevo, TipoLicencia};
pub use informe::{
    CamposTolva, DespachoMateriales, InformeDiario, ProduccionEquipo, ProduccionEquipoDatos,
    Supervisor, SupervisorNuevo, ViajesAljibe,
};
pub use maquinaria::{Maquinaria, MaquinariaNueva};
pub use movimiento::{
    EstadisticasMovimiento, Movimiento, MovimientoNuevo, Viaje, ViajeNuevo,
};
pub use postura::{Postura, PosturaNueva};
