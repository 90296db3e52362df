// ==========================================
// Sistema de Gestión de Flota - API del informe de producción
// ==========================================
// Responsabilidad: armar el informe de producción de una fecha/turno
// (agregación de movimientos + producción guardada), guardar jefatura
// y producción por equipo, y exportar el informe a PDF.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::informe::{InformeDiario, ProduccionEquipoDatos, Supervisor};
use crate::domain::types::{EmpresaSupervisor, Turno};
use crate::engine::produccion::{agrupar_produccion, ResumenProduccion};
use crate::report::{
    nombre_informe_produccion, DocumentoPdf, RenderizadorInforme, PLANTILLA_INFORME_PRODUCCION,
};
use crate::repository::informe_repo::{
    InformeDiarioRepository, ProduccionEquipoRepository, SupervisorRepository,
};
use crate::repository::maquinaria_repo::MaquinariaRepository;
use crate::repository::movimiento_repo::MovimientoRepository;

// ==========================================
// DTOs
// ==========================================

/// Contexto listo para render del informe de producción
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformeProduccionContexto {
    pub titulo: String,
    pub fecha: NaiveDate,
    pub turno: Turno,
    pub informe: InformeDiario,
    pub resumen: ResumenProduccion,
    pub lideres_tirreno: Vec<Supervisor>,
    pub jefes_mandante: Vec<Supervisor>,
}

/// Producción enviada para un equipo del informe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntradaProduccion {
    pub maquinaria_id: i64,
    pub datos: ProduccionEquipoDatos,
}

// ==========================================
// ProduccionApi
// ==========================================
pub struct ProduccionApi {
    informe_repo: Arc<InformeDiarioRepository>,
    supervisor_repo: Arc<SupervisorRepository>,
    produccion_repo: Arc<ProduccionEquipoRepository>,
    movimiento_repo: Arc<MovimientoRepository>,
    maquinaria_repo: Arc<MaquinariaRepository>,
    renderizador: Arc<dyn RenderizadorInforme>,
}

impl ProduccionApi {
    pub fn new(
        informe_repo: Arc<InformeDiarioRepository>,
        supervisor_repo: Arc<SupervisorRepository>,
        produccion_repo: Arc<ProduccionEquipoRepository>,
        movimiento_repo: Arc<MovimientoRepository>,
        maquinaria_repo: Arc<MaquinariaRepository>,
        renderizador: Arc<dyn RenderizadorInforme>,
    ) -> Self {
        Self {
            informe_repo,
            supervisor_repo,
            produccion_repo,
            movimiento_repo,
            maquinaria_repo,
            renderizador,
        }
    }

    /// Informe de producción de una fecha/turno
    ///
    /// Crea el informe si no existe. "Activo" = equipo referenciado por
    /// algún movimiento de la fecha/turno; un turno sin movimientos
    /// produce las tres secciones vacías.
    pub fn informe_produccion(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> ApiResult<InformeProduccionContexto> {
        let informe = self.informe_repo.obtener_o_crear(fecha, turno)?;
        let resumen = self.armar_resumen(&informe, fecha, turno)?;

        Ok(InformeProduccionContexto {
            titulo: format!(
                "Informe de Producción - {} {}",
                turno,
                fecha.format("%d-%m-%Y")
            ),
            fecha,
            turno,
            informe,
            resumen,
            lideres_tirreno: self
                .supervisor_repo
                .listar_por_empresa(EmpresaSupervisor::Tirreno)?,
            jefes_mandante: self
                .supervisor_repo
                .listar_por_empresa(EmpresaSupervisor::Mandante)?,
        })
    }

    /// Guarda la jefatura del turno
    pub fn guardar_lideres(
        &self,
        fecha: NaiveDate,
        turno: Turno,
        lider_tirreno_id: Option<i64>,
        jefe_mandante_id: Option<i64>,
    ) -> ApiResult<InformeDiario> {
        let informe = self.informe_repo.obtener_o_crear(fecha, turno)?;
        self.informe_repo
            .actualizar_lideres(informe.id, lider_tirreno_id, jefe_mandante_id)?;

        tracing::info!(
            "Jefatura guardada para {} {}: lider={:?} jefe={:?}",
            fecha,
            turno,
            lider_tirreno_id,
            jefe_mandante_id
        );

        self.informe_repo
            .buscar(fecha, turno)?
            .ok_or_else(|| ApiError::InternalError("informe recién creado no encontrado".into()))
    }

    /// Guarda la producción enviada por equipo
    ///
    /// Upsert por (informe, equipo); solo los grupos presentes en cada
    /// entrada sobreescriben lo guardado. Las entradas sin datos se
    /// omiten.
    ///
    /// # Retorna
    /// - Ok(usize): número de equipos actualizados
    pub fn guardar_produccion(
        &self,
        fecha: NaiveDate,
        turno: Turno,
        entradas: &[EntradaProduccion],
    ) -> ApiResult<usize> {
        let informe = self.informe_repo.obtener_o_crear(fecha, turno)?;

        let mut guardados = 0;
        for entrada in entradas {
            if entrada.datos.esta_vacio() {
                continue;
            }
            self.produccion_repo
                .guardar(informe.id, entrada.maquinaria_id, &entrada.datos)?;
            guardados += 1;
        }

        tracing::info!(
            "Producción guardada para {} {}: {} equipos",
            fecha,
            turno,
            guardados
        );

        Ok(guardados)
    }

    /// Exporta el informe de producción como documento descargable
    pub fn contexto_pdf(&self, fecha: NaiveDate, turno: Turno) -> ApiResult<DocumentoPdf> {
        let informe = self.informe_repo.obtener_o_crear(fecha, turno)?;
        let resumen = self.armar_resumen(&informe, fecha, turno)?;

        let contexto = serde_json::json!({
            "titulo": format!(
                "Informe de Producción - {} {}",
                turno,
                fecha.format("%d-%m-%Y")
            ),
            "informe": informe,
            "resumen": resumen,
        });

        let contenido = self
            .renderizador
            .renderizar(PLANTILLA_INFORME_PRODUCCION, &contexto)
            .map_err(|e| ApiError::RenderError(e.to_string()))?;

        Ok(DocumentoPdf {
            nombre_archivo: nombre_informe_produccion(fecha, turno),
            contenido,
        })
    }

    // ==========================================
    // Agregación interna
    // ==========================================

    fn armar_resumen(
        &self,
        informe: &InformeDiario,
        fecha: NaiveDate,
        turno: Turno,
    ) -> ApiResult<ResumenProduccion> {
        let activos = self.movimiento_repo.maquinas_activas(fecha, turno)?;
        let maquinas = self.maquinaria_repo.buscar_por_ids(&activos)?;
        let estadisticas = self.movimiento_repo.estadisticas_por_turno(fecha, turno)?;
        let produccion = self.produccion_repo.listar_por_informe(informe.id)?;

        Ok(agrupar_produccion(maquinas, estadisticas, produccion))
    }
}
