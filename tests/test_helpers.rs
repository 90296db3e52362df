#![allow(dead_code)]
// ==========================================
// Funciones auxiliares de tests
// ==========================================
// Responsabilidad: base de datos temporal con schema, estado de
// aplicación de prueba y siembra de maestros.
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use gestion_flota::app::AppState;
use gestion_flota::domain::empleado::EmpleadoNuevo;
use gestion_flota::domain::informe::SupervisorNuevo;
use gestion_flota::domain::maquinaria::MaquinariaNueva;
use gestion_flota::domain::types::{
    CodigoLugar, CodigoMaterial, EmpresaSupervisor, Faena, NivelCombustible, TipoActividad, Turno,
};
use gestion_flota::engine::movimiento_rules::MovimientoFormulario;
use gestion_flota::engine::postura_rules::PosturaFormulario;
use gestion_flota::report::RenderizadorJson;
use tempfile::NamedTempFile;

/// Crea una base temporal con el schema inicializado
///
/// # Retorna
/// - NamedTempFile: archivo temporal (debe mantenerse vivo)
/// - String: ruta de la base
pub fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().expect("No se pudo crear el archivo temporal");
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = gestion_flota::db::open_sqlite_connection(&db_path)
        .expect("No se pudo abrir la base de prueba");
    gestion_flota::db::init_schema(&conn).expect("No se pudo inicializar el schema");

    (temp_file, db_path)
}

/// Estado de aplicación de prueba (renderizador JSON)
pub fn crear_estado(db_path: &str) -> AppState {
    AppState::new(db_path, Arc::new(RenderizadorJson)).expect("No se pudo crear el AppState")
}

/// Siembra un empleado operador
pub fn sembrar_empleado(state: &AppState, codigo: &str, nombre: &str, rut: &str) -> i64 {
    state
        .empleado_repo
        .crear(&EmpleadoNuevo {
            codigo_trabajador: codigo.to_string(),
            nombre_completo: nombre.to_string(),
            rut: rut.to_string(),
            cargo: "Operador Maquinaria".to_string(),
            tipo_contrato: "Indefinido".to_string(),
            fecha_contratacion: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            fecha_termino_contrato: None,
            fecha_vencimiento_licencia: None,
            fecha_nacimiento: None,
        })
        .expect("No se pudo sembrar el empleado")
}

/// Siembra un equipo de la flota
pub fn sembrar_maquinaria(state: &AppState, codigo: &str, tipo: &str) -> i64 {
    state
        .maquinaria_repo
        .crear(&MaquinariaNueva {
            codigo_eq: codigo.to_string(),
            marca: "Komatsu".to_string(),
            modelo: "WA500".to_string(),
            tipo: tipo.to_string(),
            patente: None,
            horometro_actual: 0,
        })
        .expect("No se pudo sembrar la maquinaria")
}

/// Siembra un supervisor
pub fn sembrar_supervisor(state: &AppState, nombre: &str, empresa: EmpresaSupervisor) -> i64 {
    state
        .supervisor_repo
        .crear(&SupervisorNuevo {
            nombre_completo: nombre.to_string(),
            empresa,
        })
        .expect("No se pudo sembrar el supervisor")
}

/// Formulario de movimiento con horómetros dados
pub fn formulario_movimiento(
    fecha: NaiveDate,
    turno: Turno,
    empleado_id: i64,
    maquinaria_id: i64,
    horometro_inicial: Option<&str>,
    horometro_final: Option<&str>,
) -> MovimientoFormulario {
    MovimientoFormulario {
        fecha,
        empleado_id,
        maquinaria_id,
        faena: Faena::MinaElWay,
        turno,
        descripcion_trabajo_especial: None,
        horometro_inicial: horometro_inicial.map(str::to_string),
        horometro_final: horometro_final.map(str::to_string),
        horas_trabajadas: None,
        combustible_cargado: None,
        origen_combustible: None,
        detalle_chip_otro_equipo: None,
        nivel_inicial_combustible: None,
        nivel_final_combustible: NivelCombustible::Medio,
        observaciones: None,
    }
}

/// Fila de postura con origen de mina y sector completo
pub fn fila_postura_mina() -> PosturaFormulario {
    PosturaFormulario {
        tipo_actividad: TipoActividad::Produccion,
        origen: CodigoLugar::Ta,
        sector_prefijo: Some("TA".to_string()),
        sector_banco: Some("610".to_string()),
        sector_tiro: Some("23".to_string()),
        destino: CodigoLugar::Pch,
        material: CodigoMaterial::CalNormal,
        eliminar: false,
        modificado: true,
    }
}

/// Fila de postura con origen fuera de mina (sin sector)
pub fn fila_postura_no_mina() -> PosturaFormulario {
    PosturaFormulario {
        tipo_actividad: TipoActividad::Despacho,
        origen: CodigoLugar::Cs,
        sector_prefijo: None,
        sector_banco: None,
        sector_tiro: None,
        destino: CodigoLugar::Cbbf,
        material: CodigoMaterial::Cemento,
        eliminar: false,
        modificado: true,
    }
}
