// ==========================================
// Sistema de Gestión de Flota - Renderizado de documentos
// ==========================================
// El motor HTML/PDF es un colaborador externo: aquí vive la costura
// (trait + contexto serializable + nombre de archivo). La aplicación
// arma el contexto; el renderizador lo convierte en bytes.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::Turno;

/// Plantilla del certificado laboral
pub const PLANTILLA_CERTIFICADO: &str = "certificado";
/// Plantilla del informe de producción en PDF
pub const PLANTILLA_INFORME_PRODUCCION: &str = "informe_produccion_pdf";

// ==========================================
// RenderizadorInforme - costura con el motor externo
// ==========================================
/// Convierte un contexto serializado en un documento
///
/// La implementación productiva (HTML → PDF) vive fuera de este crate;
/// los tests usan renderizadores de prueba.
pub trait RenderizadorInforme: Send + Sync {
    /// # Parámetros
    /// - `plantilla`: identificador de plantilla
    /// - `contexto`: datos ya serializados para el render
    ///
    /// # Retorna
    /// - Ok(Vec<u8>): bytes del documento
    fn renderizar(&self, plantilla: &str, contexto: &serde_json::Value)
        -> anyhow::Result<Vec<u8>>;
}

// ==========================================
// DocumentoPdf - respuesta descargable
// ==========================================
/// Documento listo para adjuntar como descarga
///
/// nombre_archivo alimenta el encabezado content-disposition de la
/// superficie HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentoPdf {
    pub nombre_archivo: String,
    pub contenido: Vec<u8>,
}

/// Nombre del certificado de un empleado, derivado de su RUT
pub fn nombre_certificado(rut: &str) -> String {
    format!("certificado_{}.pdf", rut)
}

/// Nombre del informe de producción de una fecha/turno
pub fn nombre_informe_produccion(fecha: NaiveDate, turno: Turno) -> String {
    format!("informe_produccion_{}_{}.pdf", fecha, turno)
}

// ==========================================
// RenderizadorJson - implementación de desarrollo
// ==========================================
/// Renderizador de respaldo: serializa el contexto como JSON legible
///
/// Útil para el arranque local y para inspeccionar contextos sin el
/// motor PDF instalado.
pub struct RenderizadorJson;

impl RenderizadorInforme for RenderizadorJson {
    fn renderizar(
        &self,
        plantilla: &str,
        contexto: &serde_json::Value,
    ) -> anyhow::Result<Vec<u8>> {
        let documento = serde_json::json!({
            "plantilla": plantilla,
            "contexto": contexto,
        });
        Ok(serde_json::to_vec_pretty(&documento)?)
    }
}
