// ==========================================
// Sistema de Gestión de Flota - Agregación de producción
// ==========================================
// Arma la estructura lista para render del informe de producción de un
// turno: por cada equipo activo, las estadísticas de movimientos y la
// producción guardada, particionadas en tres secciones fijas.
// Orden: equipos pesados por (tipo, codigo_eq); camiones por codigo_eq.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::informe::{
    CamposTolva, DespachoMateriales, ProduccionEquipo, ViajesAljibe,
};
use crate::domain::maquinaria::Maquinaria;
use crate::domain::movimiento::EstadisticasMovimiento;
use crate::domain::types::CategoriaEquipo;

// ==========================================
// Casilla - celda numerada de una planilla fija
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Casilla {
    pub numero: u32,
    pub valor: String, // "" cuando no hay valor registrado
}

// ==========================================
// Fichas por sección del informe
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FichaEquipoPesado {
    pub maquinaria: Maquinaria,
    pub estadisticas: Option<EstadisticasMovimiento>,
    pub despacho_fabrica: DespachoMateriales,
    pub remanejo_apoyo: DespachoMateriales,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FichaCamionTolva {
    pub maquinaria: Maquinaria,
    pub estadisticas: Option<EstadisticasMovimiento>,
    /// Exactamente 10 casillas, en orden de planilla
    pub casillas: Vec<Casilla>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FichaCamionAljibe {
    pub maquinaria: Maquinaria,
    pub estadisticas: Option<EstadisticasMovimiento>,
    /// Exactamente 4 casillas, en orden de planilla
    pub casillas: Vec<Casilla>,
    pub observaciones: Option<String>,
}

// ==========================================
// ResumenProduccion - salida del agregador
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenProduccion {
    pub equipos_pesados: Vec<FichaEquipoPesado>,
    pub camiones_tolva: Vec<FichaCamionTolva>,
    pub camiones_aljibe: Vec<FichaCamionAljibe>,
}

impl ResumenProduccion {
    pub fn esta_vacio(&self) -> bool {
        self.equipos_pesados.is_empty()
            && self.camiones_tolva.is_empty()
            && self.camiones_aljibe.is_empty()
    }
}

/// Agrupa la producción del turno en las tres secciones del informe
///
/// # Parámetros
/// - `maquinas`: equipos activos del turno (referenciados por algún
///   movimiento de la fecha/turno)
/// - `estadisticas`: agregados de movimientos por equipo
/// - `produccion`: registros de producción guardados del informe
///
/// Un equipo cuyo tipo no clasifica en ninguna categoría queda fuera
/// del informe.
pub fn agrupar_produccion(
    maquinas: Vec<Maquinaria>,
    estadisticas: Vec<EstadisticasMovimiento>,
    produccion: Vec<ProduccionEquipo>,
) -> ResumenProduccion {
    let mut stats_por_equipo: HashMap<i64, EstadisticasMovimiento> = estadisticas
        .into_iter()
        .map(|e| (e.maquinaria_id, e))
        .collect();
    let mut produccion_por_equipo: HashMap<i64, ProduccionEquipo> = produccion
        .into_iter()
        .map(|p| (p.maquinaria_id, p))
        .collect();

    let mut equipos_pesados = Vec::new();
    let mut camiones_tolva = Vec::new();
    let mut camiones_aljibe = Vec::new();

    for maquina in maquinas {
        let categoria = match maquina.categoria() {
            Some(c) => c,
            None => continue,
        };
        let stats = stats_por_equipo.remove(&maquina.id);
        let guardado = produccion_por_equipo.remove(&maquina.id);

        match categoria {
            CategoriaEquipo::EquipoPesado => {
                let (despacho, remanejo, observaciones) = match guardado {
                    Some(p) => (
                        p.despacho_fabrica.unwrap_or_default(),
                        p.remanejo_apoyo.unwrap_or_default(),
                        p.observaciones,
                    ),
                    None => (Default::default(), Default::default(), None),
                };
                equipos_pesados.push(FichaEquipoPesado {
                    maquinaria: maquina,
                    estadisticas: stats,
                    despacho_fabrica: despacho,
                    remanejo_apoyo: remanejo,
                    observaciones,
                });
            }
            CategoriaEquipo::CamionTolva => {
                let (tolva, observaciones) = match guardado {
                    Some(p) => (p.camion_tolva.unwrap_or_default(), p.observaciones),
                    None => (CamposTolva::default(), None),
                };
                camiones_tolva.push(FichaCamionTolva {
                    maquinaria: maquina,
                    estadisticas: stats,
                    casillas: casillas_desde(tolva.valores()),
                    observaciones,
                });
            }
            CategoriaEquipo::CamionAljibe => {
                let (aljibe, observaciones) = match guardado {
                    Some(p) => (p.camion_aljibe.unwrap_or_default(), p.observaciones),
                    None => (ViajesAljibe::default(), None),
                };
                camiones_aljibe.push(FichaCamionAljibe {
                    maquinaria: maquina,
                    estadisticas: stats,
                    casillas: casillas_desde(aljibe.valores()),
                    observaciones,
                });
            }
        }
    }

    // Pesados por (tipo, código); camiones por código
    equipos_pesados.sort_by(|a, b| {
        (a.maquinaria.tipo.as_str(), a.maquinaria.codigo_eq.as_str())
            .cmp(&(b.maquinaria.tipo.as_str(), b.maquinaria.codigo_eq.as_str()))
    });
    camiones_tolva.sort_by(|a, b| a.maquinaria.codigo_eq.cmp(&b.maquinaria.codigo_eq));
    camiones_aljibe.sort_by(|a, b| a.maquinaria.codigo_eq.cmp(&b.maquinaria.codigo_eq));

    ResumenProduccion {
        equipos_pesados,
        camiones_tolva,
        camiones_aljibe,
    }
}

fn casillas_desde(valores: Vec<String>) -> Vec<Casilla> {
    valores
        .into_iter()
        .enumerate()
        .map(|(i, valor)| Casilla {
            numero: (i + 1) as u32,
            valor,
        })
        .collect()
}
