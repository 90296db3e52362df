// ==========================================
// Sistema de Gestión de Flota - Inicialización SQLite
// ==========================================
// Objetivo:
// - Unificar el comportamiento PRAGMA de todos los Connection::open,
//   evitando que unos módulos abran con foreign_keys y otros no
// - Unificar busy_timeout para reducir errores busy esporádicos
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// busy_timeout por defecto (milisegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Versión de schema que espera el código actual
///
/// La versión se usa como aviso (no hay migración automática): ejecutar
/// sobre una base antigua queda registrado en el log en vez de fallar
/// silenciosamente.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Configura los PRAGMA unificados de una conexión SQLite
///
/// foreign_keys y busy_timeout se aplican por conexión, no por base.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre una conexión SQLite con la configuración unificada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Lee schema_version (None si la tabla no existe)
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Crea el schema completo de forma idempotente
///
/// Reglas de integridad referencial:
/// - InformeDiario → Postura → Viaje: ON DELETE CASCADE
/// - Empleado/Maquinaria → Movimiento: ON DELETE SET NULL
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS cliente (
            id INTEGER PRIMARY KEY,
            nombre TEXT NOT NULL,
            rut TEXT NOT NULL UNIQUE,
            direccion TEXT,
            telefono TEXT,
            email TEXT
        );

        CREATE TABLE IF NOT EXISTS proyecto (
            id INTEGER PRIMARY KEY,
            nombre TEXT NOT NULL,
            cliente_id INTEGER NOT NULL REFERENCES cliente(id) ON DELETE CASCADE,
            ubicacion TEXT NOT NULL,
            fecha_inicio TEXT NOT NULL,
            fecha_termino TEXT
        );

        CREATE TABLE IF NOT EXISTS tipo_licencia (
            id INTEGER PRIMARY KEY,
            nombre TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS empleado (
            id INTEGER PRIMARY KEY,
            codigo_trabajador TEXT NOT NULL UNIQUE,
            nombre_completo TEXT NOT NULL,
            rut TEXT NOT NULL UNIQUE,
            cargo TEXT NOT NULL,
            tipo_contrato TEXT NOT NULL,
            fecha_contratacion TEXT NOT NULL,
            fecha_termino_contrato TEXT,
            fecha_vencimiento_licencia TEXT,
            fecha_nacimiento TEXT
        );

        CREATE TABLE IF NOT EXISTS empleado_licencia (
            empleado_id INTEGER NOT NULL REFERENCES empleado(id) ON DELETE CASCADE,
            tipo_licencia_id INTEGER NOT NULL REFERENCES tipo_licencia(id) ON DELETE CASCADE,
            PRIMARY KEY (empleado_id, tipo_licencia_id)
        );

        CREATE TABLE IF NOT EXISTS maquinaria (
            id INTEGER PRIMARY KEY,
            codigo_eq TEXT NOT NULL UNIQUE,
            marca TEXT NOT NULL DEFAULT 'SIN-MARCA',
            modelo TEXT NOT NULL DEFAULT 'SIN-MODELO',
            tipo TEXT NOT NULL DEFAULT 'SIN-TIPO',
            patente TEXT,
            horometro_actual INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS movimiento (
            id INTEGER PRIMARY KEY,
            fecha TEXT NOT NULL,
            empleado_id INTEGER REFERENCES empleado(id) ON DELETE SET NULL,
            maquinaria_id INTEGER REFERENCES maquinaria(id) ON DELETE SET NULL,
            faena TEXT NOT NULL DEFAULT 'Mina El Way',
            turno TEXT NOT NULL DEFAULT 'Día',
            descripcion_trabajo_especial TEXT,
            horometro_inicial INTEGER NOT NULL,
            horometro_final INTEGER,
            horas_trabajadas REAL,
            combustible_cargado REAL,
            origen_combustible TEXT,
            detalle_chip_otro_equipo TEXT,
            nivel_inicial_combustible TEXT,
            nivel_final_combustible TEXT NOT NULL DEFAULT 'vacio',
            observaciones TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_movimiento_fecha_turno
            ON movimiento(fecha, turno);
        CREATE INDEX IF NOT EXISTS idx_movimiento_maquinaria
            ON movimiento(maquinaria_id, fecha);

        CREATE TABLE IF NOT EXISTS supervisor (
            id INTEGER PRIMARY KEY,
            nombre_completo TEXT NOT NULL UNIQUE,
            empresa TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS informe_diario (
            id INTEGER PRIMARY KEY,
            fecha TEXT NOT NULL,
            turno TEXT NOT NULL,
            lider_tirreno_id INTEGER REFERENCES supervisor(id) ON DELETE SET NULL,
            jefe_mandante_id INTEGER REFERENCES supervisor(id) ON DELETE SET NULL,
            UNIQUE (fecha, turno)
        );

        CREATE TABLE IF NOT EXISTS postura (
            id INTEGER PRIMARY KEY,
            informe_id INTEGER NOT NULL REFERENCES informe_diario(id) ON DELETE CASCADE,
            numero_postura INTEGER NOT NULL,
            tipo_actividad TEXT NOT NULL,
            origen TEXT NOT NULL DEFAULT 'TA',
            sector_prefijo TEXT,
            sector_banco TEXT,
            sector_tiro TEXT,
            destino TEXT NOT NULL DEFAULT 'PCH',
            material TEXT NOT NULL DEFAULT 'Estéril',
            UNIQUE (informe_id, numero_postura)
        );

        CREATE TABLE IF NOT EXISTS viaje (
            id INTEGER PRIMARY KEY,
            movimiento_id INTEGER NOT NULL REFERENCES movimiento(id) ON DELETE CASCADE,
            postura_id INTEGER NOT NULL REFERENCES postura(id) ON DELETE CASCADE,
            cantidad INTEGER NOT NULL DEFAULT 0,
            UNIQUE (movimiento_id, postura_id)
        );

        CREATE TABLE IF NOT EXISTS produccion_equipo (
            id INTEGER PRIMARY KEY,
            informe_id INTEGER NOT NULL REFERENCES informe_diario(id) ON DELETE CASCADE,
            maquinaria_id INTEGER NOT NULL REFERENCES maquinaria(id) ON DELETE CASCADE,
            datos_despacho_fabrica TEXT,
            datos_remanejo_apoyo TEXT,
            datos_camion_tolva TEXT,
            datos_camion_aljibe TEXT,
            observaciones TEXT,
            UNIQUE (informe_id, maquinaria_id)
        );

        INSERT OR IGNORE INTO schema_version (version) VALUES (1);
        "#,
    )?;
    Ok(())
}
