// ==========================================
// Inicialización del sistema de logs
// ==========================================
// Usa tracing y tracing-subscriber
// El nivel se configura por variable de entorno
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa el sistema de logs
///
/// # Variables de entorno
/// - RUST_LOG: filtro de nivel (por defecto: info)
///   Ejemplo: RUST_LOG=debug o RUST_LOG=gestion_flota=trace
///
/// # Ejemplo
/// ```no_run
/// use gestion_flota::logging;
/// logging::init();
/// ```
pub fn init() {
    // Nivel desde variable de entorno, por defecto info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Inicializa logs para el entorno de tests
///
/// Nivel más detallado para facilitar la depuración
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
