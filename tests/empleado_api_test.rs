// ==========================================
// Tests de la API de empleados
// ==========================================

mod test_helpers;

use chrono::{Duration, Local, NaiveDate};
use gestion_flota::api::error::ApiError;
use gestion_flota::domain::empleado::EmpleadoNuevo;

#[test]
fn test_listado_con_licencias() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    let empleado_id = test_helpers::sembrar_empleado(&state, "0401", "Berta Mora", "12.121.212-1");
    let clase_b = state.empleado_repo.crear_tipo_licencia("Clase B").unwrap();
    let clase_d = state.empleado_repo.crear_tipo_licencia("Clase D").unwrap();
    state
        .empleado_repo
        .asignar_licencia(empleado_id, clase_b)
        .unwrap();
    state
        .empleado_repo
        .asignar_licencia(empleado_id, clase_d)
        .unwrap();

    let empleados = state.empleado_api.listar_empleados().unwrap();
    assert_eq!(empleados.len(), 1);
    let nombres: Vec<&str> = empleados[0]
        .licencias
        .iter()
        .map(|l| l.nombre.as_str())
        .collect();
    assert_eq!(nombres, vec!["Clase B", "Clase D"]);
}

#[test]
fn test_busqueda_por_codigo_con_vigencia() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    let vencimiento = Local::now().date_naive() + Duration::days(30);
    let empleado_id = state
        .empleado_repo
        .crear(&EmpleadoNuevo {
            codigo_trabajador: "0402".to_string(),
            nombre_completo: "Óscar Núñez".to_string(),
            rut: "13.131.313-1".to_string(),
            cargo: "Operador Camión Tolva".to_string(),
            tipo_contrato: "Plazo Fijo".to_string(),
            fecha_contratacion: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            fecha_termino_contrato: None,
            fecha_vencimiento_licencia: Some(vencimiento),
            fecha_nacimiento: None,
        })
        .unwrap();
    let clase_b = state.empleado_repo.crear_tipo_licencia("Clase B").unwrap();
    state
        .empleado_repo
        .asignar_licencia(empleado_id, clase_b)
        .unwrap();

    let ficha = state.empleado_api.buscar_por_codigo("0402").unwrap();
    assert_eq!(ficha.id, empleado_id);
    assert_eq!(ficha.nombre_completo, "Óscar Núñez");
    assert_eq!(ficha.tipo_licencia, "Clase B");
    assert_eq!(
        ficha.fecha_vencimiento_licencia,
        vencimiento.format("%d-%m-%Y").to_string()
    );
    assert_eq!(ficha.dias_vencimiento_licencia, Some(30));
}

#[test]
fn test_busqueda_sin_vigencia_registrada() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    test_helpers::sembrar_empleado(&state, "0403", "Olga Paz", "14.141.414-1");

    let ficha = state.empleado_api.buscar_por_codigo("0403").unwrap();
    assert_eq!(ficha.fecha_vencimiento_licencia, "No especificada");
    assert_eq!(ficha.dias_vencimiento_licencia, None);
    assert_eq!(ficha.tipo_licencia, "");
}

#[test]
fn test_busqueda_codigo_inexistente() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    let err = state.empleado_api.buscar_por_codigo("9999").unwrap_err();
    match err {
        ApiError::NotFound(msg) => assert_eq!(msg, "Empleado no encontrado"),
        other => panic!("Se esperaba NotFound, se obtuvo {:?}", other),
    }
}

#[test]
fn test_certificado_nombre_derivado_del_rut() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    let empleado_id = test_helpers::sembrar_empleado(&state, "0404", "Raúl Cid", "15.151.515-1");

    let documento = state.empleado_api.certificado(empleado_id).unwrap();
    assert_eq!(documento.nombre_archivo, "certificado_15.151.515-1.pdf");

    let texto = String::from_utf8(documento.contenido).unwrap();
    assert!(texto.contains("Raúl Cid"));
    assert!(texto.contains("fecha_emision"));
}

#[test]
fn test_certificado_empleado_inexistente() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);

    let err = state.empleado_api.certificado(404).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
