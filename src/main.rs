// ==========================================
// Sistema de Gestión de Flota - Punto de entrada
// ==========================================
// Inicializa logs, configuración y estado de la aplicación. La
// superficie HTTP externa monta sus rutas sobre los handlers de
// gestion_flota::app::handlers.
// ==========================================

use std::sync::Arc;

use gestion_flota::app::AppState;
use gestion_flota::config::AppConfig;
use gestion_flota::report::RenderizadorJson;

fn main() {
    gestion_flota::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", gestion_flota::APP_NAME);
    tracing::info!("Versión: {}", gestion_flota::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    tracing::info!("Base de datos: {}", config.db_path);

    // Renderizador de desarrollo; el motor HTML/PDF productivo se
    // inyecta desde la superficie que embebe esta biblioteca.
    let renderizador = Arc::new(RenderizadorJson);

    match AppState::new(&config.db_path, renderizador) {
        Ok(state) => {
            tracing::info!("AppState listo, base inicializada en {}", state.db_path);
        }
        Err(e) => {
            tracing::error!("No se pudo inicializar la aplicación: {}", e);
            std::process::exit(1);
        }
    }
}
