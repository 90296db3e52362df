// ==========================================
// Sistema de Gestión de Flota - Reglas de posturas
// ==========================================
// El descriptor de sector (prefijo/banco/tiro) es opcional salvo que
// el origen sea un sector de mina, donde cada campo faltante produce
// su propio error.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::postura::PosturaNueva;
use crate::domain::types::{CodigoLugar, CodigoMaterial, TipoActividad};
use crate::engine::errores::ErroresCampo;

pub const MSG_OBLIGATORIO_MINA: &str = "Este campo es obligatorio para orígenes de mina.";

// ==========================================
// PosturaFormulario - fila cruda del formulario del turno
// ==========================================
// eliminar y modificado reflejan el estado de la fila en el set
// enviado: una fila marcada para borrar o sin cambios queda fuera del
// reemplazo sea válida o no.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosturaFormulario {
    pub tipo_actividad: TipoActividad,
    pub origen: CodigoLugar,
    pub sector_prefijo: Option<String>,
    pub sector_banco: Option<String>,
    pub sector_tiro: Option<String>,
    pub destino: CodigoLugar,
    pub material: CodigoMaterial,
    pub eliminar: bool,
    pub modificado: bool,
}

impl PosturaFormulario {
    /// true si la fila participa del reemplazo del set
    pub fn incluida(&self) -> bool {
        self.modificado && !self.eliminar
    }
}

/// Valida una fila de postura
///
/// # Retorna
/// - Ok(PosturaNueva): fila validada (sector normalizado: en blanco → None)
/// - Err(ErroresCampo): un error por cada campo de sector faltante
///   cuando el origen es de mina
pub fn validar_postura(form: &PosturaFormulario) -> Result<PosturaNueva, ErroresCampo> {
    let mut errores = ErroresCampo::new();

    let prefijo = normalizar(&form.sector_prefijo);
    let banco = normalizar(&form.sector_banco);
    let tiro = normalizar(&form.sector_tiro);

    if form.origen.es_origen_mina() {
        if prefijo.is_none() {
            errores.agregar("sector_prefijo", MSG_OBLIGATORIO_MINA);
        }
        if banco.is_none() {
            errores.agregar("sector_banco", MSG_OBLIGATORIO_MINA);
        }
        if tiro.is_none() {
            errores.agregar("sector_tiro", MSG_OBLIGATORIO_MINA);
        }
    }

    if !errores.esta_vacio() {
        return Err(errores);
    }

    Ok(PosturaNueva {
        tipo_actividad: form.tipo_actividad,
        origen: form.origen,
        sector_prefijo: prefijo,
        sector_banco: banco,
        sector_tiro: tiro,
        destino: form.destino,
        material: form.material,
    })
}

fn normalizar(valor: &Option<String>) -> Option<String> {
    valor
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
