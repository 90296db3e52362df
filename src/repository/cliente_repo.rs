// ==========================================
// Sistema de Gestión de Flota - Repositorio de clientes y proyectos
// ==========================================

use crate::domain::cliente::{Cliente, ClienteNuevo, Proyecto, ProyectoNuevo};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// ClienteRepository
// ==========================================
pub struct ClienteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ClienteRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn crear(&self, cliente: &ClienteNuevo) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO cliente (nombre, rut, direccion, telefono, email)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                cliente.nombre,
                cliente.rut,
                cliente.direccion,
                cliente.telefono,
                cliente.email,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn listar(&self) -> RepositoryResult<Vec<Cliente>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, nombre, rut, direccion, telefono, email
            FROM cliente
            ORDER BY nombre ASC
            "#,
        )?;

        let clientes = stmt
            .query_map([], |row| {
                Ok(Cliente {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    rut: row.get(2)?,
                    direccion: row.get(3)?,
                    telefono: row.get(4)?,
                    email: row.get(5)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(clientes)
    }
}

// ==========================================
// ProyectoRepository
// ==========================================
pub struct ProyectoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProyectoRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn crear(&self, proyecto: &ProyectoNuevo) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO proyecto (nombre, cliente_id, ubicacion, fecha_inicio, fecha_termino)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                proyecto.nombre,
                proyecto.cliente_id,
                proyecto.ubicacion,
                proyecto.fecha_inicio.to_string(),
                proyecto.fecha_termino.map(|d| d.to_string()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn listar_por_cliente(&self, cliente_id: i64) -> RepositoryResult<Vec<Proyecto>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, nombre, cliente_id, ubicacion, fecha_inicio, fecha_termino
            FROM proyecto
            WHERE cliente_id = ?1
            ORDER BY fecha_inicio DESC
            "#,
        )?;

        let proyectos = stmt
            .query_map(params![cliente_id], |row| {
                Ok(Proyecto {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    cliente_id: row.get(2)?,
                    ubicacion: row.get(3)?,
                    fecha_inicio: NaiveDate::parse_from_str(
                        &row.get::<_, String>(4)?,
                        "%Y-%m-%d",
                    )
                    .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                    fecha_termino: row
                        .get::<_, Option<String>>(5)?
                        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(proyectos)
    }
}
