// ==========================================
// Sistema de Gestión de Flota - API de empleados
// ==========================================
// Responsabilidad: listado del personal, búsqueda por código de
// trabajador y certificado laboral en PDF.
// ==========================================

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::empleado::Empleado;
use crate::report::{nombre_certificado, DocumentoPdf, RenderizadorInforme, PLANTILLA_CERTIFICADO};
use crate::repository::empleado_repo::EmpleadoRepository;

// ==========================================
// FichaEmpleado - resultado de la búsqueda por código
// ==========================================
// Respuesta del lookup JSON del formulario de movimientos: incluye las
// licencias unidas y los días restantes de vigencia.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FichaEmpleado {
    pub id: i64,
    pub nombre_completo: String,
    pub rut: String,
    pub cargo: String,
    pub tipo_licencia: String,                 // nombres unidos por coma
    pub fecha_vencimiento_licencia: String,    // dd-mm-aaaa o "No especificada"
    pub dias_vencimiento_licencia: Option<i64>, // días restantes (negativo = vencida)
}

// ==========================================
// EmpleadoApi
// ==========================================
pub struct EmpleadoApi {
    empleado_repo: Arc<EmpleadoRepository>,
    renderizador: Arc<dyn RenderizadorInforme>,
}

impl EmpleadoApi {
    pub fn new(
        empleado_repo: Arc<EmpleadoRepository>,
        renderizador: Arc<dyn RenderizadorInforme>,
    ) -> Self {
        Self {
            empleado_repo,
            renderizador,
        }
    }

    /// Listado completo del personal
    pub fn listar_empleados(&self) -> ApiResult<Vec<Empleado>> {
        Ok(self.empleado_repo.listar()?)
    }

    /// Busca un empleado por su código de trabajador
    ///
    /// # Retorna
    /// - Ok(FichaEmpleado): ficha con licencias y vigencia
    /// - Err(ApiError::NotFound): el código no existe
    pub fn buscar_por_codigo(&self, codigo: &str) -> ApiResult<FichaEmpleado> {
        let empleado = self
            .empleado_repo
            .buscar_por_codigo(codigo)?
            .ok_or_else(|| ApiError::NotFound("Empleado no encontrado".to_string()))?;

        let licencias = empleado
            .licencias
            .iter()
            .map(|l| l.nombre.clone())
            .collect::<Vec<_>>()
            .join(", ");

        let (fecha_vencimiento, dias_restantes) = match empleado.fecha_vencimiento_licencia {
            Some(vencimiento) => {
                let hoy = Local::now().date_naive();
                (
                    vencimiento.format("%d-%m-%Y").to_string(),
                    Some((vencimiento - hoy).num_days()),
                )
            }
            None => ("No especificada".to_string(), None),
        };

        Ok(FichaEmpleado {
            id: empleado.id,
            nombre_completo: empleado.nombre_completo,
            rut: empleado.rut,
            cargo: empleado.cargo,
            tipo_licencia: licencias,
            fecha_vencimiento_licencia: fecha_vencimiento,
            dias_vencimiento_licencia: dias_restantes,
        })
    }

    /// Genera el certificado laboral de un empleado
    ///
    /// # Retorna
    /// - Ok(DocumentoPdf): documento con nombre derivado del RUT
    /// - Err(ApiError::NotFound): el empleado no existe
    pub fn certificado(&self, empleado_id: i64) -> ApiResult<DocumentoPdf> {
        let empleado = self
            .empleado_repo
            .buscar_por_id(empleado_id)?
            .ok_or_else(|| ApiError::NotFound("Empleado no encontrado.".to_string()))?;

        let contexto = serde_json::json!({
            "empleado": empleado,
            "fecha_emision": Local::now().date_naive(),
        });

        let contenido = self
            .renderizador
            .renderizar(PLANTILLA_CERTIFICADO, &contexto)
            .map_err(|e| ApiError::RenderError(e.to_string()))?;

        tracing::info!(
            "Certificado generado para empleado id={} rut={}",
            empleado.id,
            empleado.rut
        );

        Ok(DocumentoPdf {
            nombre_archivo: nombre_certificado(&empleado.rut),
            contenido,
        })
    }
}
