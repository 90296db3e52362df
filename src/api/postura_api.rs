// ==========================================
// Sistema de Gestión de Flota - API de posturas
// ==========================================
// Responsabilidad: reemplazo completo del set de posturas de un turno.
// Política heredada de la operación: se borra todo y se inserta lo que
// sobrevive, renumerando 1..N. Los viajes que referenciaban posturas
// borradas caen por cascada; el reemplazo corre en una transacción.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::postura::{Postura, PosturaNueva};
use crate::domain::types::Turno;
use crate::engine::errores::ErroresCampo;
use crate::engine::postura_rules::{validar_postura, PosturaFormulario};
use crate::repository::informe_repo::InformeDiarioRepository;
use crate::repository::postura_repo::PosturaRepository;

// ==========================================
// DTOs
// ==========================================

/// Envío del set completo de posturas de una fecha/turno
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinirPosturasRequest {
    pub fecha: NaiveDate,
    pub turno: Turno,
    pub filas: Vec<PosturaFormulario>,
}

/// Resultado del reemplazo del set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "resultado", rename_all = "snake_case")]
pub enum DefinirPosturasResultado {
    /// Set reemplazado; las posturas quedaron numeradas 1..total
    Guardado {
        informe_id: i64,
        total: usize,
        mensaje: String,
    },
    /// Ninguna escritura; errores por fila en orden de envío
    Rechazado { errores_filas: Vec<ErroresCampo> },
}

// ==========================================
// PosturaApi
// ==========================================
pub struct PosturaApi {
    informe_repo: Arc<InformeDiarioRepository>,
    postura_repo: Arc<PosturaRepository>,
}

impl PosturaApi {
    pub fn new(
        informe_repo: Arc<InformeDiarioRepository>,
        postura_repo: Arc<PosturaRepository>,
    ) -> Self {
        Self {
            informe_repo,
            postura_repo,
        }
    }

    /// Reemplaza el set de posturas del turno
    ///
    /// Las filas marcadas para borrar o sin cambios quedan fuera del
    /// reemplazo sean válidas o no. Si alguna fila incluida es
    /// inválida no se borra ni inserta nada.
    pub fn definir_posturas(
        &self,
        req: &DefinirPosturasRequest,
    ) -> ApiResult<DefinirPosturasResultado> {
        let informe = self.informe_repo.obtener_o_crear(req.fecha, req.turno)?;

        let mut errores_filas = Vec::with_capacity(req.filas.len());
        let mut supervivientes: Vec<PosturaNueva> = Vec::new();
        let mut hay_errores = false;

        for fila in &req.filas {
            if !fila.incluida() {
                errores_filas.push(ErroresCampo::new());
                continue;
            }
            match validar_postura(fila) {
                Ok(validada) => {
                    supervivientes.push(validada);
                    errores_filas.push(ErroresCampo::new());
                }
                Err(errores) => {
                    hay_errores = true;
                    errores_filas.push(errores);
                }
            }
        }

        if hay_errores {
            tracing::info!(
                "Posturas rechazadas para {} {}: filas con error",
                req.fecha,
                req.turno
            );
            return Ok(DefinirPosturasResultado::Rechazado { errores_filas });
        }

        let total = self
            .postura_repo
            .reemplazar_para_informe(informe.id, &supervivientes)?;

        tracing::info!(
            "Set de posturas reemplazado para {} {}: {} posturas",
            req.fecha,
            req.turno,
            total
        );

        Ok(DefinirPosturasResultado::Guardado {
            informe_id: informe.id,
            total,
            mensaje: format!(
                "Posturas para el turno del {} guardadas con éxito.",
                req.fecha
            ),
        })
    }

    /// Posturas vigentes de una fecha/turno para recargar el formulario
    /// (lista vacía si el informe no existe)
    pub fn posturas_actuales(
        &self,
        fecha: NaiveDate,
        turno: Turno,
    ) -> ApiResult<Vec<Postura>> {
        let informe = match self.informe_repo.buscar(fecha, turno)? {
            Some(i) => i,
            None => return Ok(Vec::new()),
        };
        Ok(self.postura_repo.listar_por_informe(informe.id)?)
    }
}
