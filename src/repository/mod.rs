// ==========================================
// Sistema de Gestión de Flota - Capa de repositorios
// ==========================================
// Acceso a datos sobre SQLite. Regla: los repositorios no contienen
// lógica de negocio; las reglas viven en engine/ y la orquestación en
// api/.
// ==========================================

pub mod cliente_repo;
pub mod empleado_repo;
pub mod error;
pub mod informe_repo;
pub mod maquinaria_repo;
pub mod movimiento_repo;
pub mod postura_repo;

// Reexportaciones
pub use cliente_repo::{ClienteRepository, ProyectoRepository};
pub use empleado_repo::EmpleadoRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use informe_repo::{InformeDiarioRepository, ProduccionEquipoRepository, SupervisorRepository};
pub use maquinaria_repo::MaquinariaRepository;
pub use movimiento_repo::MovimientoRepository;
pub use postura_repo::PosturaRepository;
