// ==========================================
// Sistema de Gestión de Flota - Repositorio del informe diario
// ==========================================
// Responsabilidad: informe_diario, supervisor y produccion_equipo.
// Los grupos de producción se persisten como JSON en columnas TEXT;
// la forma la fija el dominio (registros fijos, no mapas abiertos).
// ==========================================

use crate::domain::informe::{
    CamposTolva, DespachoMateriales, InformeDiario, ProduccionEquipo, ProduccionEquipoDatos,
    Supervisor, SupervisorNuevo, ViajesAljibe,
};
use crate::domain::types::{EmpresaSupervisor, Turno};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

// ==========================================
// InformeDiarioRepository
// ==========================================
pub struct InformeDiarioRepository {
    conn: Arc<Mutex<Connection>>,
}

impl InformeDiarioRepository {
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

    /// Busca el informe de una fecha/turno
    pub fn buscar(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> RepositoryResult<Option<InformeDiario>> {
        let conn = self.get_conn()?;
        buscar_informe(&conn, fecha, turno)
    }

    /// Busca o crea el informe de una fecha/turno
    ///
    /// La creación es idempotente: dos llamadas con el mismo par
    /// devuelven el mismo registro.
    pub fn obtener_o_crear(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> RepositoryResult<InformeDiario> {
        let conn = self.get_conn()?;

        if let Some(informe) = buscar_informe(&conn, fecha, turno)? {
            return Ok(informe);
        }

        conn.execute(
            "INSERT OR IGNORE INTO informe_diario (fecha, turno) VALUES (?1, ?2)",
            params![fecha.to_string(), turno.db_str()],
        )?;

        buscar_informe(&conn, fecha, turno)?.ok_or_else(|| RepositoryError::InternalError(
            format!("informe_diario no quedó creado para {} {}", fecha, turno),
        ))
    }

    /// Actualiza la jefatura del turno
    pub fn actualizar_lideres(
        &self,
        informe_id: i64,
        lider_tirreno_id: Option<i64>,
        jefe_mandante_id: Option<i64>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            UPDATE informe_diario
            SET lider_tirreno_id = ?2, jefe_mandante_id = ?3
            WHERE id = ?1
            "#,
            params![informe_id, lider_tirreno_id, jefe_mandante_id],
        )?;
        Ok(())
    }
}

fn buscar_informe(
    conn: &Connection,
    fecha: NaiveDate,
    turno: Turno,
) -> RepositoryResult<Option<InformeDiario>> {
    let result = conn
        .query_row(
            r#"
            SELECT id, fecha, turno, lider_tirreno_id, jefe_mandante_id
            FROM informe_diario
            WHERE fecha = ?1 AND turno = ?2
            "#,
            params![fecha.to_string(), turno.db_str()],
            |row| {
                Ok(InformeDiario {
                    id: row.get(0)?,
                    fecha: NaiveDate::parse_from_str(&row.get::<_, String>(1)?, "%Y-%m-%d")
                        .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                    turno: Turno::from_db_str(&row.get::<_, String>(2)?).unwrap_or(Turno::Dia),
                    lider_tirreno_id: row.get(3)?,
                    jefe_mandante_id: row.get(4)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

// ==========================================
// SupervisorRepository
// ==========================================
pub struct SupervisorRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SupervisorRepository {
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

    pub fn crear(&self, supervisor: &SupervisorNuevo) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO supervisor (nombre_completo, empresa) VALUES (?1, ?2)",
            params![supervisor.nombre_completo, supervisor.empresa.db_str()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Supervisores de una empresa, ordenados por nombre
    pub fn listar_por_empresa(
        &self,
        empresa: EmpresaSupervisor,
    ) -> RepositoryResult<Vec<Supervisor>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, nombre_completo, empresa
            FROM supervisor
            WHERE empresa = ?1
            ORDER BY nombre_completo ASC
            "#,
        )?;

        let supervisores = stmt
            .query_map(params![empresa.db_str()], |row| {
                Ok(Supervisor {
                    id: row.get(0)?,
                    nombre_completo: row.get(1)?,
                    empresa: EmpresaSupervisor::from_db_str(&row.get::<_, String>(2)?)
                        .unwrap_or(EmpresaSupervisor::Tirreno),
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(supervisores)
    }
}

// ==========================================
// ProduccionEquipoRepository
// ==========================================
pub struct ProduccionEquipoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProduccionEquipoRepository {
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

    /// Upsert de la producción de un equipo en un informe
    ///
    /// Solo los grupos presentes en el envío sobreescriben la columna;
    /// un grupo ausente conserva el valor guardado (COALESCE sobre el
    /// valor excluido).
    pub fn guardar(
        &self,
        informe_id: i64,
        maquinaria_id: i64,
        datos: &ProduccionEquipoDatos,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO produccion_equipo (
                informe_id, maquinaria_id,
                datos_despacho_fabrica, datos_remanejo_apoyo,
                datos_camion_tolva, datos_camion_aljibe, observaciones
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(informe_id, maquinaria_id) DO UPDATE SET
                datos_despacho_fabrica =
                    COALESCE(excluded.datos_despacho_fabrica, produccion_equipo.datos_despacho_fabrica),
                datos_remanejo_apoyo =
                    COALESCE(excluded.datos_remanejo_apoyo, produccion_equipo.datos_remanejo_apoyo),
                datos_camion_tolva =
                    COALESCE(excluded.datos_camion_tolva, produccion_equipo.datos_camion_tolva),
                datos_camion_aljibe =
                    COALESCE(excluded.datos_camion_aljibe, produccion_equipo.datos_camion_aljibe),
                observaciones =
                    COALESCE(excluded.observaciones, produccion_equipo.observaciones)
            "#,
            params![
                informe_id,
                maquinaria_id,
                a_json(&datos.despacho_fabrica)?,
                a_json(&datos.remanejo_apoyo)?,
                a_json(&datos.camion_tolva)?,
                a_json(&datos.camion_aljibe)?,
                datos.observaciones,
            ],
        )?;
        Ok(())
    }

    /// Producción guardada de un informe (todos los equipos)
    pub fn listar_por_informe(
        &self,
        informe_id: i64,
    ) -> RepositoryResult<Vec<ProduccionEquipo>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                id, informe_id, maquinaria_id,
                datos_despacho_fabrica, datos_remanejo_apoyo,
                datos_camion_tolva, datos_camion_aljibe, observaciones
            FROM produccion_equipo
            WHERE informe_id = ?1
            "#,
        )?;

        let filas = stmt
            .query_map(params![informe_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, Option<String>>(6)?,
                    row.get::<_, Option<String>>(7)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        let mut registros = Vec::with_capacity(filas.len());
        for (id, informe_id, maquinaria_id, despacho, remanejo, tolva, aljibe, observaciones) in
            filas
        {
            registros.push(ProduccionEquipo {
                id,
                informe_id,
                maquinaria_id,
                despacho_fabrica: desde_json::<DespachoMateriales>(despacho)?,
                remanejo_apoyo: desde_json::<DespachoMateriales>(remanejo)?,
                camion_tolva: desde_json::<CamposTolva>(tolva)?,
                camion_aljibe: desde_json::<ViajesAljibe>(aljibe)?,
                observaciones,
            });
        }

        Ok(registros)
    }
}

// ==========================================
// Funciones auxiliares - columnas JSON
// ==========================================

fn a_json<T: Serialize>(valor: &Option<T>) -> RepositoryResult<Option<String>> {
    match valor {
        Some(v) => serde_json::to_string(v)
            .map(Some)
            .map_err(|e| RepositoryError::InternalError(format!("serialización JSON: {}", e))),
        None => Ok(None),
    }
}

fn desde_json<T: DeserializeOwned>(texto: Option<String>) -> RepositoryResult<Option<T>> {
    match texto {
        Some(t) => serde_json::from_str(&t)
            .map(Some)
            .map_err(|e| RepositoryError::ValidationError(format!("JSON almacenado inválido: {}", e))),
        None => Ok(None),
    }
}
