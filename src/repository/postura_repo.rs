// ==========================================
// Sistema de Gestión de Flota - Repositorio de posturas
// ==========================================

use crate::domain::postura::{Postura, PosturaNueva};
use crate::domain::types::{CodigoLugar, CodigoMaterial, TipoActividad};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// PosturaRepository
// ==========================================
pub struct PosturaRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PosturaRepository {
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

    /// Posturas de un informe, ordenadas por correlativo
    pub fn listar_por_informe(&self, informe_id: i64) -> RepositoryResult<Vec<Postura>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE informe_id = ?1 ORDER BY numero_postura ASC",
            SELECT_POSTURA
        ))?;

        let posturas = stmt
            .query_map(params![informe_id], mapear_postura)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(posturas)
    }

    /// Reemplaza el set completo de posturas de un informe
    ///
    /// Borra todas las posturas previas e inserta las filas en orden de
    /// envío con correlativo 1..N, dentro de una transacción: nunca se
    /// observa un estado intermedio vacío. Los viajes que referenciaban
    /// posturas borradas caen por cascada de clave foránea.
    ///
    /// # Retorna
    /// - Ok(usize): número de posturas insertadas
    pub fn reemplazar_para_informe(
        &self,
        informe_id: i64,
        filas: &[PosturaNueva],
    ) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM postura WHERE informe_id = ?1",
            params![informe_id],
        )?;

        let mut numero_postura: u32 = 1;
        for fila in filas {
            tx.execute(
                r#"
                INSERT INTO postura (
                    informe_id, numero_postura, tipo_actividad, origen,
                    sector_prefijo, sector_banco, sector_tiro, destino, material
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    informe_id,
                    numero_postura,
                    fila.tipo_actividad.db_str(),
                    fila.origen.db_str(),
                    fila.sector_prefijo,
                    fila.sector_banco,
                    fila.sector_tiro,
                    fila.destino.db_str(),
                    fila.material.db_str(),
                ],
            )?;
            numero_postura += 1;
        }

        tx.commit()?;
        Ok((numero_postura - 1) as usize)
    }
}

// ==========================================
// Funciones auxiliares
// ==========================================

const SELECT_POSTURA: &str = r#"
    SELECT
        id, informe_id, numero_postura, tipo_actividad, origen,
        sector_prefijo, sector_banco, sector_tiro, destino, material
    FROM postura
"#;

fn mapear_postura(row: &Row<'_>) -> SqliteResult<Postura> {
    Ok(Postura {
        id: row.get(0)?,
        informe_id: row.get(1)?,
        numero_postura: row.get(2)?,
        tipo_actividad: TipoActividad::from_db_str(&row.get::<_, String>(3)?)
            .unwrap_or(TipoActividad::Produccion),
        origen: CodigoLugar::from_db_str(&row.get::<_, String>(4)?).unwrap_or(CodigoLugar::Ta),
        sector_prefijo: row.get(5)?,
        sector_banco: row.get(6)?,
        sector_tiro: row.get(7)?,
        destino: CodigoLugar::from_db_str(&row.get::<_, String>(8)?).unwrap_or(CodigoLugar::Pch),
        material: CodigoMaterial::from_db_str(&row.get::<_, String>(9)?)
            .unwrap_or(CodigoMaterial::Esteril),
    })
}
