// ==========================================
// Sistema de Gestión de Flota - Repositorio de movimientos
// ==========================================
// Responsabilidad: acceso a las tablas movimiento y viaje, más las
// consultas de agregación del informe de producción.
// ==========================================

use crate::domain::movimiento::{
    EstadisticasMovimiento, Movimiento, MovimientoNuevo, Viaje, ViajeNuevo,
};
use crate::domain::types::{Faena, NivelCombustible, OrigenCombustible, Turno};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// MovimientoRepository
// ==========================================
pub struct MovimientoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MovimientoRepository {
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

    /// Persiste un movimiento junto con sus viajes en una transacción
    ///
    /// # Parámetros
    /// - `movimiento`: registro validado
    /// - `viajes`: viajes validados (ya filtrados: cantidad > 0)
    ///
    /// # Retorna
    /// - Ok((id, n)): id del movimiento y número de viajes insertados
    pub fn crear_con_viajes(
        &self,
        movimiento: &MovimientoNuevo,
        viajes: &[ViajeNuevo],
    ) -> RepositoryResult<(i64, usize)> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            r#"
            INSERT INTO movimiento (
                fecha, empleado_id, maquinaria_id, faena, turno,
                descripcion_trabajo_especial,
                horometro_inicial, horometro_final, horas_trabajadas,
                combustible_cargado, origen_combustible, detalle_chip_otro_equipo,
                nivel_inicial_combustible, nivel_final_combustible, observaciones
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                movimiento.fecha.to_string(),
                movimiento.empleado_id,
                movimiento.maquinaria_id,
                movimiento.faena.db_str(),
                movimiento.turno.db_str(),
                movimiento.descripcion_trabajo_especial,
                movimiento.horometro_inicial,
                movimiento.horometro_final,
                movimiento.horas_trabajadas,
                movimiento.combustible_cargado,
                movimiento.origen_combustible.map(|o| o.db_str()),
                movimiento.detalle_chip_otro_equipo,
                movimiento.nivel_inicial_combustible.map(|n| n.db_str()),
                movimiento.nivel_final_combustible.db_str(),
                movimiento.observaciones,
            ],
        )?;
        let movimiento_id = tx.last_insert_rowid();

        let mut insertados = 0;
        for viaje in viajes {
            tx.execute(
                r#"
                INSERT INTO viaje (movimiento_id, postura_id, cantidad)
                VALUES (?1, ?2, ?3)
                "#,
                params![movimiento_id, viaje.postura_id, viaje.cantidad],
            )?;
            insertados += 1;
        }

        tx.commit()?;
        Ok((movimiento_id, insertados))
    }

    /// Busca un movimiento por id
    pub fn buscar_por_id(&self, id: i64) -> RepositoryResult<Option<Movimiento>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_MOVIMIENTO),
            params![id],
            mapear_movimiento,
        );

        match result {
            Ok(movimiento) => Ok(Some(movimiento)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Último movimiento registrado de un equipo (fecha más reciente,
    /// luego id más alto)
    pub fn ultimo_de_maquina(&self, maquinaria_id: i64) -> RepositoryResult<Option<Movimiento>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            &format!(
                "{} WHERE maquinaria_id = ?1 ORDER BY fecha DESC, id DESC LIMIT 1",
                SELECT_MOVIMIENTO
            ),
            params![maquinaria_id],
            mapear_movimiento,
        );

        match result {
            Ok(movimiento) => Ok(Some(movimiento)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Movimientos de una fecha (todos los turnos), en orden de ingreso
    pub fn listar_por_fecha(&self, fecha: NaiveDate) -> RepositoryResult<Vec<Movimiento>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE fecha = ?1 ORDER BY id ASC",
            SELECT_MOVIMIENTO
        ))?;

        let movimientos = stmt
            .query_map(params![fecha.to_string()], mapear_movimiento)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(movimientos)
    }

    /// Equipos con actividad en una fecha/turno (ids distintos)
    pub fn maquinas_activas(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> RepositoryResult<Vec<i64>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT DISTINCT maquinaria_id
            FROM movimiento
            WHERE fecha = ?1 AND turno = ?2 AND maquinaria_id IS NOT NULL
            "#,
        )?;

        let ids = stmt
            .query_map(params![fecha.to_string(), turno.db_str()], |row| {
                row.get::<_, i64>(0)
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(ids)
    }

    /// Estadísticas agregadas por equipo para una fecha/turno
    ///
    /// Por equipo: MIN(horometro_inicial), MAX(horometro_final),
    /// SUM(horas_trabajadas), SUM(combustible_cargado).
    pub fn estadisticas_por_turno(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> RepositoryResult<Vec<EstadisticasMovimiento>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                maquinaria_id,
                MIN(horometro_inicial),
                MAX(horometro_final),
                SUM(horas_trabajadas),
                SUM(combustible_cargado)
            FROM movimiento
            WHERE fecha = ?1 AND turno = ?2 AND maquinaria_id IS NOT NULL
            GROUP BY maquinaria_id
            "#,
        )?;

        let estadisticas = stmt
            .query_map(params![fecha.to_string(), turno.db_str()], |row| {
                Ok(EstadisticasMovimiento {
                    maquinaria_id: row.get(0)?,
                    hora_inicio: row.get(1)?,
                    hora_termino: row.get(2)?,
                    total_horas: row.get(3)?,
                    total_combustible: row.get(4)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(estadisticas)
    }

    /// Viajes registrados contra un movimiento
    pub fn viajes_de_movimiento(&self, movimiento_id: i64) -> RepositoryResult<Vec<Viaje>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, movimiento_id, postura_id, cantidad
            FROM viaje
            WHERE movimiento_id = ?1
            ORDER BY id ASC
            "#,
        )?;

        let viajes = stmt
            .query_map(params![movimiento_id], |row| {
                Ok(Viaje {
                    id: row.get(0)?,
                    movimiento_id: row.get(1)?,
                    postura_id: row.get(2)?,
                    cantidad: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(viajes)
    }

    /// Total de viajes en la base (apoyo de tests de cascada)
    pub fn contar_viajes(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM viaje", [], |row| row.get(0))?;
        Ok(total)
    }
}

// ==========================================
// Funciones auxiliares
// ==========================================

const SELECT_MOVIMIENTO: &str = r#"
    SELECT
        id, fecha, empleado_id, maquinaria_id, faena, turno,
        descripcion_trabajo_especial,
        horometro_inicial, horometro_final, horas_trabajadas,
        combustible_cargado, origen_combustible, detalle_chip_otro_equipo,
        nivel_inicial_combustible, nivel_final_combustible, observaciones
    FROM movimiento
"#;

fn mapear_movimiento(row: &Row<'_>) -> SqliteResult<Movimiento> {
    Ok(Movimiento {
        id: row.get(0)?,
        fecha: NaiveDate::parse_from_str(&row.get::<_, String>(1)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        empleado_id: row.get(2)?,
        maquinaria_id: row.get(3)?,
        faena: Faena::from_db_str(&row.get::<_, String>(4)?).unwrap_or(Faena::MinaElWay),
        turno: Turno::from_db_str(&row.get::<_, String>(5)?).unwrap_or(Turno::Dia),
        descripcion_trabajo_especial: row.get(6)?,
        horometro_inicial: row.get(7)?,
        horometro_final: row.get(8)?,
        horas_trabajadas: row.get(9)?,
        combustible_cargado: row.get(10)?,
        origen_combustible: row
            .get::<_, Option<String>>(11)?
            .and_then(|s| OrigenCombustible::from_db_str(&s)),
        detalle_chip_otro_equipo: row.get(12)?,
        nivel_inicial_combustible: row
            .get::<_, Option<String>>(13)?
            .and_then(|s| NivelCombustible::from_db_str(&s)),
        nivel_final_combustible: NivelCombustible::from_db_str(&row.get::<_, String>(14)?)
            .unwrap_or(NivelCombustible::Vacio),
        observaciones: row.get(15)?,
    })
}
