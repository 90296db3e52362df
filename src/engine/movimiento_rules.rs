// ==========================================
// Sistema de Gestión de Flota - Reglas del movimiento diario
// ==========================================
// Validación cruzada del formulario de movimiento y de sus viajes.
// Reglas del horómetro:
// - lectura final > lectura inicial
// - (final - inicial) <= 720 minutos (12 horas de turno)
// - horas_trabajadas = (final - inicial) / 60, 2 decimales
// Reglas de combustible:
// - con carga declarada, el origen es obligatorio
// - origen "chip de otro equipo" exige detallar el equipo
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::movimiento::{MovimientoNuevo, ViajeNuevo};
use crate::domain::types::{Faena, NivelCombustible, OrigenCombustible, Turno};
use crate::engine::errores::ErroresCampo;

/// Diferencia máxima de horómetro dentro de un turno (minutos)
pub const MAX_MINUTOS_TURNO: i64 = 12 * 60;

pub const MSG_FINAL_MAYOR: &str = "El horómetro final debe ser mayor que el inicial.";
pub const MSG_DIFERENCIA_MAXIMA: &str = "La diferencia no puede ser mayor a 12 horas.";
pub const MSG_VALOR_NUMERICO: &str = "Ingrese un valor numérico válido.";
pub const MSG_ORIGEN_REQUERIDO: &str = "Si ingresó combustible, debe especificar el origen.";
pub const MSG_DETALLE_CHIP: &str = "Debe especificar de qué equipo usó el chip.";
pub const MSG_POSTURA_INVALIDA: &str = "Seleccione una postura válida para el turno.";

// ==========================================
// MovimientoFormulario - datos crudos del envío
// ==========================================
// Las lecturas de horómetro llegan como texto: la regla de parseo es
// parte de la validación (una lectura en blanco significa turno
// abierto). horas_trabajadas trae el valor del campo de solo lectura
// del formulario y siempre se recalcula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovimientoFormulario {
    pub fecha: NaiveDate,
    pub empleado_id: i64,
    pub maquinaria_id: i64,
    pub faena: Faena,
    pub turno: Turno,
    pub descripcion_trabajo_especial: Option<String>,
    pub horometro_inicial: Option<String>,
    pub horometro_final: Option<String>,
    pub horas_trabajadas: Option<f64>,
    pub combustible_cargado: Option<f64>,
    pub origen_combustible: Option<OrigenCombustible>,
    pub detalle_chip_otro_equipo: Option<String>,
    pub nivel_inicial_combustible: Option<NivelCombustible>,
    pub nivel_final_combustible: NivelCombustible,
    pub observaciones: Option<String>,
}

// ==========================================
// ViajeFormulario - sub-formulario de viajes
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViajeFormulario {
    pub postura_id: i64,
    /// Cantidad como texto crudo; vacío o ausente cuenta como 0
    pub cantidad: Option<String>,
    /// true si la fila cambió respecto a su estado inicial
    pub modificado: bool,
}

/// Valida el formulario de movimiento
///
/// # Retorna
/// - Ok(MovimientoNuevo): registro validado, con horas_trabajadas
///   derivadas (None si el turno queda abierto)
/// - Err(ErroresCampo): todos los errores aplicables, acumulados
pub fn validar_movimiento(
    form: &MovimientoFormulario,
) -> Result<MovimientoNuevo, ErroresCampo> {
    let mut errores = ErroresCampo::new();

    let inicial_texto = texto_limpio(&form.horometro_inicial);
    let final_texto = texto_limpio(&form.horometro_final);

    let mut horometro_inicial: u32 = 0;
    let mut horometro_final: Option<u32> = None;
    let mut horas_trabajadas: Option<f64> = None;

    if !final_texto.is_empty() {
        // Lectura final presente: se parsean ambas lecturas; la inicial
        // en blanco cuenta como 0. Un fallo de parseo corta los chequeos
        // numéricos pero no los de combustible.
        let inicial = if inicial_texto.is_empty() {
            Ok(0u32)
        } else {
            inicial_texto.parse::<u32>()
        };

        match (inicial, final_texto.parse::<u32>()) {
            (Ok(h_inicial), Ok(h_final)) => {
                let diferencia = i64::from(h_final) - i64::from(h_inicial);
                if diferencia <= 0 {
                    errores.agregar("horometro_final", MSG_FINAL_MAYOR);
                }
                if diferencia > MAX_MINUTOS_TURNO {
                    errores.agregar("horometro_final", MSG_DIFERENCIA_MAXIMA);
                }
                horometro_inicial = h_inicial;
                horometro_final = Some(h_final);
                horas_trabajadas = Some(redondear_2(diferencia as f64 / 60.0));
            }
            _ => {
                errores.agregar("horometro_final", MSG_VALOR_NUMERICO);
            }
        }
    } else {
        // Turno abierto: solo se exige una lectura inicial parseable.
        // Las horas quedan en NULL aunque el envío traiga un valor viejo.
        if inicial_texto.is_empty() {
            horometro_inicial = 0;
        } else {
            match inicial_texto.parse::<u32>() {
                Ok(h_inicial) => horometro_inicial = h_inicial,
                Err(_) => errores.agregar("horometro_inicial", MSG_VALOR_NUMERICO),
            }
        }
    }

    // Chequeos de combustible, independientes del horómetro
    let combustible_declarado = form.combustible_cargado.map_or(false, |v| v != 0.0);
    if combustible_declarado && form.origen_combustible.is_none() {
        errores.agregar("origen_combustible", MSG_ORIGEN_REQUERIDO);
    }
    if form.origen_combustible == Some(OrigenCombustible::EstacionChipOtroEquipo)
        && texto_limpio(&form.detalle_chip_otro_equipo).is_empty()
    {
        errores.agregar("detalle_chip_otro_equipo", MSG_DETALLE_CHIP);
    }

    if !errores.esta_vacio() {
        return Err(errores);
    }

    Ok(MovimientoNuevo {
        fecha: form.fecha,
        empleado_id: form.empleado_id,
        maquinaria_id: form.maquinaria_id,
        faena: form.faena,
        turno: form.turno,
        descripcion_trabajo_especial: form.descripcion_trabajo_especial.clone(),
        horometro_inicial,
        horometro_final,
        horas_trabajadas,
        combustible_cargado: form.combustible_cargado,
        origen_combustible: form.origen_combustible,
        detalle_chip_otro_equipo: form.detalle_chip_otro_equipo.clone(),
        nivel_inicial_combustible: form.nivel_inicial_combustible,
        nivel_final_combustible: form.nivel_final_combustible,
        observaciones: form.observaciones.clone(),
    })
}

/// Valida un sub-formulario de viaje
///
/// # Parámetros
/// - `posturas_validas`: ids de postura del informe de la fecha/turno
///   del movimiento
///
/// # Retorna
/// - Ok(Some(ViajeNuevo)): viaje a persistir
/// - Ok(None): fila omitida en silencio (sin cambios o cantidad 0)
/// - Err(ErroresCampo): cantidad no numérica o postura no resoluble
pub fn validar_viaje(
    form: &ViajeFormulario,
    posturas_validas: &HashSet<i64>,
) -> Result<Option<ViajeNuevo>, ErroresCampo> {
    let mut errores = ErroresCampo::new();

    let cantidad_texto = texto_limpio(&form.cantidad);
    let cantidad = if cantidad_texto.is_empty() {
        0u32
    } else {
        match cantidad_texto.parse::<u32>() {
            Ok(c) => c,
            Err(_) => {
                errores.agregar("cantidad", MSG_VALOR_NUMERICO);
                return Err(errores);
            }
        }
    };

    if !form.modificado || cantidad == 0 {
        return Ok(None);
    }

    if !posturas_validas.contains(&form.postura_id) {
        errores.agregar("postura", MSG_POSTURA_INVALIDA);
        return Err(errores);
    }

    Ok(Some(ViajeNuevo {
        postura_id: form.postura_id,
        cantidad,
    }))
}

// ==========================================
// Funciones auxiliares
// ==========================================

fn texto_limpio(valor: &Option<String>) -> &str {
    valor.as_deref().map(str::trim).unwrap_or("")
}

fn redondear_2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formulario_base() -> MovimientoFormulario {
        MovimientoFormulario {
            fecha: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            empleado_id: 1,
            maquinaria_id: 1,
            faena: Faena::MinaElWay,
            turno: Turno::Dia,
            descripcion_trabajo_especial: None,
            horometro_inicial: Some("100".to_string()),
            horometro_final: Some("460".to_string()),
            horas_trabajadas: None,
            combustible_cargado: None,
            origen_combustible: None,
            detalle_chip_otro_equipo: None,
            nivel_inicial_combustible: None,
            nivel_final_combustible: NivelCombustible::Medio,
            observaciones: None,
        }
    }

    #[test]
    fn test_horas_derivadas_redondeo_exacto() {
        // 100 → 460: 360 minutos = 6.00 horas
        let validado = validar_movimiento(&formulario_base()).unwrap();
        assert_eq!(validado.horometro_inicial, 100);
        assert_eq!(validado.horometro_final, Some(460));
        assert_eq!(validado.horas_trabajadas, Some(6.00));
    }

    #[test]
    fn test_horas_con_decimales() {
        let mut form = formulario_base();
        form.horometro_final = Some("350".to_string());
        // 250 minutos = 4.1666... → 4.17
        let validado = validar_movimiento(&form).unwrap();
        assert_eq!(validado.horas_trabajadas, Some(4.17));
    }

    #[test]
    fn test_final_menor_que_inicial() {
        let mut form = formulario_base();
        form.horometro_inicial = Some("100".to_string());
        form.horometro_final = Some("90".to_string());

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(errores.mensajes("horometro_final"), &[MSG_FINAL_MAYOR]);
    }

    #[test]
    fn test_final_igual_a_inicial() {
        let mut form = formulario_base();
        form.horometro_final = Some("100".to_string());

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(errores.mensajes("horometro_final"), &[MSG_FINAL_MAYOR]);
    }

    #[test]
    fn test_diferencia_sobre_12_horas() {
        let mut form = formulario_base();
        form.horometro_final = Some("821".to_string());
        // 721 minutos, un minuto sobre el máximo

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(
            errores.mensajes("horometro_final"),
            &[MSG_DIFERENCIA_MAXIMA]
        );
    }

    #[test]
    fn test_diferencia_justo_en_el_limite() {
        let mut form = formulario_base();
        form.horometro_final = Some("820".to_string());
        // 720 minutos exactos: permitido

        let validado = validar_movimiento(&form).unwrap();
        assert_eq!(validado.horas_trabajadas, Some(12.00));
    }

    #[test]
    fn test_inicial_en_blanco_cuenta_como_cero() {
        let mut form = formulario_base();
        form.horometro_inicial = None;
        form.horometro_final = Some("300".to_string());

        let validado = validar_movimiento(&form).unwrap();
        assert_eq!(validado.horometro_inicial, 0);
        assert_eq!(validado.horas_trabajadas, Some(5.00));
    }

    #[test]
    fn test_final_no_numerico() {
        let mut form = formulario_base();
        form.horometro_final = Some("46O".to_string());

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(errores.mensajes("horometro_final"), &[MSG_VALOR_NUMERICO]);
    }

    #[test]
    fn test_parseo_invalido_no_corta_combustible() {
        let mut form = formulario_base();
        form.horometro_final = Some("abc".to_string());
        form.combustible_cargado = Some(30.0);
        form.origen_combustible = None;

        let errores = validar_movimiento(&form).unwrap_err();
        assert!(errores.contiene("horometro_final"));
        assert_eq!(
            errores.mensajes("origen_combustible"),
            &[MSG_ORIGEN_REQUERIDO]
        );
    }

    #[test]
    fn test_turno_abierto_fuerza_horas_null() {
        let mut form = formulario_base();
        form.horometro_final = None;
        form.horas_trabajadas = Some(6.0); // valor viejo del campo readonly

        let validado = validar_movimiento(&form).unwrap();
        assert_eq!(validado.horometro_final, None);
        assert_eq!(validado.horas_trabajadas, None);
    }

    #[test]
    fn test_combustible_sin_origen() {
        let mut form = formulario_base();
        form.combustible_cargado = Some(50.0);

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(errores.total(), 1);
        assert_eq!(
            errores.mensajes("origen_combustible"),
            &[MSG_ORIGEN_REQUERIDO]
        );
    }

    #[test]
    fn test_combustible_con_origen_valido() {
        let mut form = formulario_base();
        form.combustible_cargado = Some(50.0);
        form.origen_combustible = Some(OrigenCombustible::CamionCombustible);

        let validado = validar_movimiento(&form).unwrap();
        assert_eq!(validado.combustible_cargado, Some(50.0));
    }

    #[test]
    fn test_chip_otro_equipo_sin_detalle() {
        let mut form = formulario_base();
        form.combustible_cargado = Some(20.0);
        form.origen_combustible = Some(OrigenCombustible::EstacionChipOtroEquipo);
        form.detalle_chip_otro_equipo = Some("  ".to_string());

        let errores = validar_movimiento(&form).unwrap_err();
        assert_eq!(
            errores.mensajes("detalle_chip_otro_equipo"),
            &[MSG_DETALLE_CHIP]
        );
    }

    #[test]
    fn test_errores_acumulados() {
        let mut form = formulario_base();
        form.horometro_inicial = Some("100".to_string());
        form.horometro_final = Some("90".to_string());
        form.combustible_cargado = Some(10.0);

        let errores = validar_movimiento(&form).unwrap_err();
        assert!(errores.contiene("horometro_final"));
        assert!(errores.contiene("origen_combustible"));
        assert_eq!(errores.total(), 2);
    }

    // ==========================================
    // Viajes
    // ==========================================

    fn posturas(ids: &[i64]) -> HashSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_viaje_valido() {
        let form = ViajeFormulario {
            postura_id: 7,
            cantidad: Some("5".to_string()),
            modificado: true,
        };
        let viaje = validar_viaje(&form, &posturas(&[7, 8])).unwrap().unwrap();
        assert_eq!(viaje.postura_id, 7);
        assert_eq!(viaje.cantidad, 5);
    }

    #[test]
    fn test_viaje_cantidad_cero_se_omite() {
        let form = ViajeFormulario {
            postura_id: 7,
            cantidad: Some("0".to_string()),
            modificado: true,
        };
        assert!(validar_viaje(&form, &posturas(&[7])).unwrap().is_none());
    }

    #[test]
    fn test_viaje_sin_cambios_se_omite() {
        let form = ViajeFormulario {
            postura_id: 7,
            cantidad: Some("3".to_string()),
            modificado: false,
        };
        assert!(validar_viaje(&form, &posturas(&[7])).unwrap().is_none());
    }

    #[test]
    fn test_viaje_cantidad_no_numerica() {
        let form = ViajeFormulario {
            postura_id: 7,
            cantidad: Some("tres".to_string()),
            modificado: true,
        };
        let errores = validar_viaje(&form, &posturas(&[7])).unwrap_err();
        assert_eq!(errores.mensajes("cantidad"), &[MSG_VALOR_NUMERICO]);
    }

    #[test]
    fn test_viaje_postura_no_resoluble() {
        let form = ViajeFormulario {
            postura_id: 99,
            cantidad: Some("2".to_string()),
            modificado: true,
        };
        let errores = validar_viaje(&form, &posturas(&[7])).unwrap_err();
        assert_eq!(errores.mensajes("postura"), &[MSG_POSTURA_INVALIDA]);
    }
}
