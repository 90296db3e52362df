// ==========================================
// Sistema de Gestión de Flota - Repositorio de empleados
// ==========================================
// Responsabilidad: acceso a las tablas empleado, tipo_licencia y
// empleado_licencia. Sin lógica de negocio.
// ==========================================

use crate::domain::empleado::{Empleado, EmpleadoNuevo, TipoLicencia};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// EmpleadoRepository
// ==========================================
pub struct EmpleadoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EmpleadoRepository {
    /// Crea un repositorio con conexión propia
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Crea un repositorio sobre una conexión compartida
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Inserta un empleado
    ///
    /// # Retorna
    /// - Ok(i64): id asignado
    pub fn crear(&self, empleado: &EmpleadoNuevo) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO empleado (
                codigo_trabajador, nombre_completo, rut, cargo, tipo_contrato,
                fecha_contratacion, fecha_termino_contrato,
                fecha_vencimiento_licencia, fecha_nacimiento
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                empleado.codigo_trabajador,
                empleado.nombre_completo,
                empleado.rut,
                empleado.cargo,
                empleado.tipo_contrato,
                empleado.fecha_contratacion.to_string(),
                empleado.fecha_termino_contrato.map(|d| d.to_string()),
                empleado.fecha_vencimiento_licencia.map(|d| d.to_string()),
                empleado.fecha_nacimiento.map(|d| d.to_string()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Inserta un tipo de licencia (idempotente por nombre)
    pub fn crear_tipo_licencia(&self, nombre: &str) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO tipo_licencia (nombre) VALUES (?1)",
            params![nombre],
        )?;
        let id: i64 = conn.query_row(
            "SELECT id FROM tipo_licencia WHERE nombre = ?1",
            params![nombre],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Asocia una licencia a un empleado
    pub fn asignar_licencia(
        &self,
        empleado_id: i64,
        tipo_licencia_id: i64,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT OR IGNORE INTO empleado_licencia (empleado_id, tipo_licencia_id)
            VALUES (?1, ?2)
            "#,
            params![empleado_id, tipo_licencia_id],
        )?;
        Ok(())
    }

    /// Busca un empleado por id
    pub fn buscar_por_id(&self, id: i64) -> RepositoryResult<Option<Empleado>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_EMPLEADO),
            params![id],
            mapear_empleado,
        );

        match result {
            Ok(mut empleado) => {
                empleado.licencias = licencias_de(&conn, empleado.id)?;
                Ok(Some(empleado))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Busca un empleado por su código de trabajador
    pub fn buscar_por_codigo(&self, codigo: &str) -> RepositoryResult<Option<Empleado>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            &format!("{} WHERE codigo_trabajador = ?1", SELECT_EMPLEADO),
            params![codigo],
            mapear_empleado,
        );

        match result {
            Ok(mut empleado) => {
                empleado.licencias = licencias_de(&conn, empleado.id)?;
                Ok(Some(empleado))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lista todos los empleados con sus licencias
    pub fn listar(&self) -> RepositoryResult<Vec<Empleado>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare(&format!("{} ORDER BY nombre_completo ASC", SELECT_EMPLEADO))?;

        let mut empleados = stmt
            .query_map([], mapear_empleado)?
            .collect::<SqliteResult<Vec<_>>>()?;

        for empleado in &mut empleados {
            empleado.licencias = licencias_de(&conn, empleado.id)?;
        }

        Ok(empleados)
    }
}

// ==========================================
// Funciones auxiliares
// ==========================================

const SELECT_EMPLEADO: &str = r#"
    SELECT
        id, codigo_trabajador, nombre_completo, rut, cargo, tipo_contrato,
        fecha_contratacion, fecha_termino_contrato,
        fecha_vencimiento_licencia, fecha_nacimiento
    FROM empleado
"#;

fn mapear_empleado(row: &Row<'_>) -> SqliteResult<Empleado> {
    Ok(Empleado {
        id: row.get(0)?,
        codigo_trabajador: row.get(1)?,
        nombre_completo: row.get(2)?,
        rut: row.get(3)?,
        cargo: row.get(4)?,
        tipo_contrato: row.get(5)?,
        fecha_contratacion: NaiveDate::parse_from_str(&row.get::<_, String>(6)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        fecha_termino_contrato: row
            .get::<_, Option<String>>(7)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        licencias: Vec::new(),
        fecha_vencimiento_licencia: row
            .get::<_, Option<String>>(8)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        fecha_nacimiento: row
            .get::<_, Option<String>>(9)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
    })
}

fn licencias_de(conn: &Connection, empleado_id: i64) -> RepositoryResult<Vec<TipoLicencia>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT tl.id, tl.nombre
        FROM tipo_licencia tl
        JOIN empleado_licencia el ON el.tipo_licencia_id = tl.id
        WHERE el.empleado_id = ?1
        ORDER BY tl.nombre ASC
        "#,
    )?;

    let licencias = stmt
        .query_map(params![empleado_id], |row| {
            Ok(TipoLicencia {
                id: row.get(0)?,
                nombre: row.get(1)?,
            })
        })?
        .collect::<SqliteResult<Vec<_>>>()?;

    Ok(licencias)
}
