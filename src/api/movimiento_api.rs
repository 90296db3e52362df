// ==========================================
// Sistema de Gestión de Flota - API de movimientos
// ==========================================
// Responsabilidad: alta atómica de movimiento + viajes, lookup del
// último horómetro, listado de posturas del turno y reporte diario.
// La validación es previa a toda escritura: si cualquier sub-formulario
// falla, no se persiste nada y el resultado trae todos los errores más
// la lista vigente de posturas para re-renderizar el formulario.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::movimiento::{Movimiento, ViajeNuevo};
use crate::domain::types::Turno;
use crate::engine::errores::ErroresCampo;
use crate::engine::movimiento_rules::{
    validar_movimiento, validar_viaje, MovimientoFormulario, ViajeFormulario,
};
use crate::repository::empleado_repo::EmpleadoRepository;
use crate::repository::informe_repo::InformeDiarioRepository;
use crate::repository::maquinaria_repo::MaquinariaRepository;
use crate::repository::movimiento_repo::MovimientoRepository;
use crate::repository::postura_repo::PosturaRepository;

// ==========================================
// DTOs
// ==========================================

/// Envío completo del formulario de movimiento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrearMovimientoRequest {
    pub movimiento: MovimientoFormulario,
    pub viajes: Vec<ViajeFormulario>,
}

/// Opción de postura para la lista de selección del formulario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpcionPostura {
    pub id: i64,
    pub descripcion: String,
}

/// Resultado del alta de movimiento
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "resultado", rename_all = "snake_case")]
pub enum CrearMovimientoResultado {
    /// Movimiento y viajes persistidos
    Guardado {
        movimiento_id: i64,
        viajes_guardados: usize,
        mensaje: String,
    },
    /// Nada persistido; errores por campo y posturas para re-render
    Rechazado {
        errores: ErroresCampo,
        /// Errores de cada sub-formulario de viaje, en orden de envío
        errores_viajes: Vec<ErroresCampo>,
        posturas: Vec<OpcionPostura>,
    },
}

/// Fila del reporte diario con los datos de despliegue ya resueltos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilaReporteDiario {
    pub movimiento: Movimiento,
    pub empleado_nombre: Option<String>,
    pub maquinaria_codigo: Option<String>,
}

/// Contexto del reporte diario de movimientos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporteDiario {
    pub titulo: String,
    pub fecha: NaiveDate,
    pub filas: Vec<FilaReporteDiario>,
}

// ==========================================
// MovimientoApi
// ==========================================
pub struct MovimientoApi {
    movimiento_repo: Arc<MovimientoRepository>,
    empleado_repo: Arc<EmpleadoRepository>,
    maquinaria_repo: Arc<MaquinariaRepository>,
    informe_repo: Arc<InformeDiarioRepository>,
    postura_repo: Arc<PosturaRepository>,
}

impl MovimientoApi {
    pub fn new(
        movimiento_repo: Arc<MovimientoRepository>,
        empleado_repo: Arc<EmpleadoRepository>,
        maquinaria_repo: Arc<MaquinariaRepository>,
        informe_repo: Arc<InformeDiarioRepository>,
        postura_repo: Arc<PosturaRepository>,
    ) -> Self {
        Self {
            movimiento_repo,
            empleado_repo,
            maquinaria_repo,
            informe_repo,
            postura_repo,
        }
    }

    /// Alta atómica de un movimiento y sus viajes
    ///
    /// Los viajes con cantidad cero o sin cambios se omiten en
    /// silencio. Cualquier error de validación (del movimiento o de
    /// cualquier viaje) impide toda persistencia.
    pub fn crear_movimiento(
        &self,
        req: &CrearMovimientoRequest,
    ) -> ApiResult<CrearMovimientoResultado> {
        let fecha = req.movimiento.fecha;
        let turno = req.movimiento.turno;

        // Posturas vigentes del turno: validan los viajes y alimentan
        // el re-render en caso de rechazo
        let opciones = self.posturas_del_turno(fecha, turno)?;
        let posturas_validas: HashSet<i64> = opciones.iter().map(|o| o.id).collect();

        let resultado_movimiento = validar_movimiento(&req.movimiento);

        let mut errores_viajes = Vec::with_capacity(req.viajes.len());
        let mut viajes_a_guardar: Vec<ViajeNuevo> = Vec::new();
        let mut viajes_con_error = false;

        for viaje in &req.viajes {
            match validar_viaje(viaje, &posturas_validas) {
                Ok(Some(v)) => {
                    viajes_a_guardar.push(v);
                    errores_viajes.push(ErroresCampo::new());
                }
                Ok(None) => errores_viajes.push(ErroresCampo::new()),
                Err(e) => {
                    viajes_con_error = true;
                    errores_viajes.push(e);
                }
            }
        }

        let movimiento = match resultado_movimiento {
            Ok(m) if !viajes_con_error => m,
            Ok(_) => {
                return Ok(CrearMovimientoResultado::Rechazado {
                    errores: ErroresCampo::new(),
                    errores_viajes,
                    posturas: opciones,
                });
            }
            Err(errores) => {
                tracing::info!(
                    "Movimiento rechazado para {} {}: {} errores",
                    fecha,
                    turno,
                    errores.total()
                );
                return Ok(CrearMovimientoResultado::Rechazado {
                    errores,
                    errores_viajes,
                    posturas: opciones,
                });
            }
        };

        let (movimiento_id, viajes_guardados) = self
            .movimiento_repo
            .crear_con_viajes(&movimiento, &viajes_a_guardar)?;

        let nombre_trabajador = self
            .empleado_repo
            .buscar_por_id(movimiento.empleado_id)?
            .map(|e| e.nombre_completo)
            .unwrap_or_else(|| format!("empleado id={}", movimiento.empleado_id));

        tracing::info!(
            "Movimiento id={} guardado ({} viajes) para {}",
            movimiento_id,
            viajes_guardados,
            nombre_trabajador
        );

        Ok(CrearMovimientoResultado::Guardado {
            movimiento_id,
            viajes_guardados,
            mensaje: format!(
                "Movimiento y viajes del trabajador {} guardados con éxito.",
                nombre_trabajador
            ),
        })
    }

    /// Última lectura de horómetro conocida de un equipo
    ///
    /// Cadena de fallback: lectura final del último movimiento (puede
    /// ser NULL si el turno quedó abierto) → horómetro almacenado del
    /// equipo → 0 si el equipo no existe.
    pub fn ultimo_horometro(&self, maquinaria_id: i64) -> ApiResult<Option<u32>> {
        if let Some(movimiento) = self.movimiento_repo.ultimo_de_maquina(maquinaria_id)? {
            return Ok(movimiento.horometro_final);
        }

        match self.maquinaria_repo.buscar_por_id(maquinaria_id)? {
            Some(maquina) => Ok(Some(maquina.horometro_actual)),
            None => Ok(Some(0)),
        }
    }

    /// Posturas del informe de una fecha/turno como opciones de
    /// selección (lista vacía si el informe no existe)
    pub fn posturas_del_turno(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> ApiResult<Vec<OpcionPostura>> {
        let informe = match self.informe_repo.buscar(fecha, turno)? {
            Some(i) => i,
            None => return Ok(Vec::new()),
        };

        let opciones = self
            .postura_repo
            .listar_por_informe(informe.id)?
            .into_iter()
            .map(|p| OpcionPostura {
                id: p.id,
                descripcion: p.descripcion(),
            })
            .collect();

        Ok(opciones)
    }

    /// Reporte diario de movimientos (todos los turnos de la fecha)
    pub fn reporte_diario(&self, fecha: NaiveDate) -> ApiResult<ReporteDiario> {
        let movimientos = self.movimiento_repo.listar_por_fecha(fecha)?;

        // Resolución de nombres para el despliegue, una consulta por id
        let mut nombres_empleado: HashMap<i64, String> = HashMap::new();
        let mut codigos_maquina: HashMap<i64, String> = HashMap::new();
        for movimiento in &movimientos {
            if let Some(id) = movimiento.empleado_id {
                if !nombres_empleado.contains_key(&id) {
                    if let Some(e) = self.empleado_repo.buscar_por_id(id)? {
                        nombres_empleado.insert(id, e.nombre_completo);
                    }
                }
            }
            if let Some(id) = movimiento.maquinaria_id {
                if !codigos_maquina.contains_key(&id) {
                    if let Some(m) = self.maquinaria_repo.buscar_por_id(id)? {
                        codigos_maquina.insert(id, m.codigo_eq);
                    }
                }
            }
        }

        let filas = movimientos
            .into_iter()
            .map(|movimiento| {
                let empleado_nombre = movimiento
                    .empleado_id
                    .and_then(|id| nombres_empleado.get(&id).cloned());
                let maquinaria_codigo = movimiento
                    .maquinaria_id
                    .and_then(|id| codigos_maquina.get(&id).cloned());
                FilaReporteDiario {
                    movimiento,
                    empleado_nombre,
                    maquinaria_codigo,
                }
            })
            .collect();

        Ok(ReporteDiario {
            titulo: format!(
                "Reporte Diario de Movimientos - {}",
                fecha.format("%d/%m/%Y")
            ),
            fecha,
            filas,
        })
    }
}
