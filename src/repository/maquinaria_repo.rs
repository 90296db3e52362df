// ==========================================
// Sistema de Gestión de Flota - Repositorio de maquinaria
// ==========================================

use crate::domain::maquinaria::{Maquinaria, MaquinariaNueva};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// MaquinariaRepository
// ==========================================
pub struct MaquinariaRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MaquinariaRepository {
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

    /// Inserta un equipo
    pub fn crear(&self, maquinaria: &MaquinariaNueva) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO maquinaria (codigo_eq, marca, modelo, tipo, patente, horometro_actual)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                maquinaria.codigo_eq,
                maquinaria.marca,
                maquinaria.modelo,
                maquinaria.tipo,
                maquinaria.patente,
                maquinaria.horometro_actual,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Busca un equipo por id
    pub fn buscar_por_id(&self, id: i64) -> RepositoryResult<Option<Maquinaria>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_MAQUINARIA),
            params![id],
            mapear_maquinaria,
        );

        match result {
            Ok(maquinaria) => Ok(Some(maquinaria)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Busca un conjunto de equipos por id
    ///
    /// El orden de salida es por (tipo, codigo_eq); la partición por
    /// categoría la hace el agregador de producción.
    pub fn buscar_por_ids(&self, ids: &[i64]) -> RepositoryResult<Vec<Maquinaria>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.get_conn()?;
        let placeholders = std::iter::repeat("?")
            .take(ids.len())
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "{} WHERE id IN ({}) ORDER BY tipo ASC, codigo_eq ASC",
            SELECT_MAQUINARIA, placeholders
        );

        let mut stmt = conn.prepare(&sql)?;
        let maquinas = stmt
            .query_map(params_from_iter(ids.iter()), mapear_maquinaria)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(maquinas)
    }

    /// Lista toda la flota
    pub fn listar(&self) -> RepositoryResult<Vec<Maquinaria>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare(&format!("{} ORDER BY codigo_eq ASC", SELECT_MAQUINARIA))?;

        let maquinas = stmt
            .query_map([], mapear_maquinaria)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(maquinas)
    }
}

// ==========================================
// Funciones auxiliares
// ==========================================

const SELECT_MAQUINARIA: &str = r#"
    SELECT id, codigo_eq, marca, modelo, tipo, patente, horometro_actual
    FROM maquinaria
"#;

fn mapear_maquinaria(row: &Row<'_>) -> SqliteResult<Maquinaria> {
    Ok(Maquinaria {
        id: row.get(0)?,
        codigo_eq: row.get(1)?,
        marca: row.get(2)?,
        modelo: row.get(3)?,
        tipo: row.get(4)?,
        patente: row.get(5)?,
        horometro_actual: row.get(6)?,
    })
}
