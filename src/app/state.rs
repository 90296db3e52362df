// ==========================================
// Sistema de Gestión de Flota - Estado de la aplicación
// ==========================================
// Responsabilidad: abrir la base, inicializar el schema y cablear
// repositorios y APIs sobre una conexión compartida. La superficie
// HTTP externa recibe un AppState y llama a los handlers de app/.
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{EmpleadoApi, MovimientoApi, PosturaApi, ProduccionApi};
use crate::report::RenderizadorInforme;
use crate::repository::{
    ClienteRepository, EmpleadoRepository, InformeDiarioRepository, MaquinariaRepository,
    MovimientoRepository, PosturaRepository, ProduccionEquipoRepository, ProyectoRepository,
    SupervisorRepository,
};

/// Estado de la aplicación
///
/// Contiene las APIs y los repositorios compartidos. Los repositorios
/// expuestos directamente cubren el mantenimiento de maestros
/// (clientes, proyectos, personal, flota) que no pasa por una API.
pub struct AppState {
    /// Ruta de la base de datos
    pub db_path: String,

    /// API de empleados (listado, búsqueda, certificado)
    pub empleado_api: Arc<EmpleadoApi>,

    /// API de movimientos y viajes
    pub movimiento_api: Arc<MovimientoApi>,

    /// API de posturas del turno
    pub postura_api: Arc<PosturaApi>,

    /// API del informe de producción
    pub produccion_api: Arc<ProduccionApi>,

    /// Repositorios de maestros
    pub cliente_repo: Arc<ClienteRepository>,
    pub proyecto_repo: Arc<ProyectoRepository>,
    pub empleado_repo: Arc<EmpleadoRepository>,
    pub maquinaria_repo: Arc<MaquinariaRepository>,
    pub supervisor_repo: Arc<SupervisorRepository>,
}

impl AppState {
    /// Crea el estado de la aplicación
    ///
    /// # Parámetros
    /// - `db_path`: ruta del archivo SQLite
    /// - `renderizador`: motor de documentos (externo o de prueba)
    ///
    /// # Pasos
    /// 1. Abre la conexión compartida con los PRAGMA unificados
    /// 2. Inicializa el schema de forma idempotente
    /// 3. Construye repositorios y APIs
    pub fn new(
        db_path: &str,
        renderizador: Arc<dyn RenderizadorInforme>,
    ) -> Result<Self, String> {
        tracing::info!("Inicializando AppState, base de datos: {}", db_path);

        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| format!("No se pudo abrir la base de datos: {}", e))?;
        crate::db::init_schema(&conn)
            .map_err(|e| format!("No se pudo inicializar el schema: {}", e))?;

        match crate::db::read_schema_version(&conn) {
            Ok(Some(v)) if v != crate::db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    "schema_version={} difiere de la esperada {}",
                    v,
                    crate::db::CURRENT_SCHEMA_VERSION
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("No se pudo leer schema_version: {}", e),
        }

        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // Repositorios sobre la conexión compartida
        // ==========================================
        let cliente_repo = Arc::new(ClienteRepository::from_connection(conn.clone()));
        let proyecto_repo = Arc::new(ProyectoRepository::from_connection(conn.clone()));
        let empleado_repo = Arc::new(EmpleadoRepository::from_connection(conn.clone()));
        let maquinaria_repo = Arc::new(MaquinariaRepository::from_connection(conn.clone()));
        let movimiento_repo = Arc::new(MovimientoRepository::from_connection(conn.clone()));
        let informe_repo = Arc::new(InformeDiarioRepository::from_connection(conn.clone()));
        let postura_repo = Arc::new(PosturaRepository::from_connection(conn.clone()));
        let supervisor_repo = Arc::new(SupervisorRepository::from_connection(conn.clone()));
        let produccion_repo = Arc::new(ProduccionEquipoRepository::from_connection(conn.clone()));

        // ==========================================
        // APIs
        // ==========================================
        let empleado_api = Arc::new(EmpleadoApi::new(
            empleado_repo.clone(),
            renderizador.clone(),
        ));
        let movimiento_api = Arc::new(MovimientoApi::new(
            movimiento_repo.clone(),
            empleado_repo.clone(),
            maquinaria_repo.clone(),
            informe_repo.clone(),
            postura_repo.clone(),
        ));
        let postura_api = Arc::new(PosturaApi::new(informe_repo.clone(), postura_repo.clone()));
        let produccion_api = Arc::new(ProduccionApi::new(
            informe_repo,
            supervisor_repo.clone(),
            produccion_repo,
            movimiento_repo,
            maquinaria_repo.clone(),
            renderizador,
        ));

        tracing::info!("AppState inicializado");

        Ok(Self {
            db_path: db_path.to_string(),
            empleado_api,
            movimiento_api,
            postura_api,
            produccion_api,
            cliente_repo,
            proyecto_repo,
            empleado_repo,
            maquinaria_repo,
            supervisor_repo,
        })
    }
}
