// ==========================================
// Tests de la API de posturas
// ==========================================
// Cubre: reemplazo completo del set con renumeración 1..N,
// idempotencia del reenvío, cascada sobre los viajes y rechazo sin
// escrituras.
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use gestion_flota::api::movimiento_api::{CrearMovimientoRequest, CrearMovimientoResultado};
use gestion_flota::api::postura_api::{DefinirPosturasRequest, DefinirPosturasResultado};
use gestion_flota::domain::types::{CodigoLugar, Turno};
use gestion_flota::engine::movimiento_rules::ViajeFormulario;
use gestion_flota::repository::MovimientoRepository;

fn fecha_turno() -> (NaiveDate, Turno) {
    (NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(), Turno::Noche)
}

#[test]
fn test_set_valido_renumera_desde_uno() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    let (fecha, turno) = fecha_turno();

    let resultado = state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![
                test_helpers::fila_postura_mina(),
                test_helpers::fila_postura_no_mina(),
                test_helpers::fila_postura_mina(),
            ],
        })
        .unwrap();

    match resultado {
        DefinirPosturasResultado::Guardado { total, mensaje, .. } => {
            assert_eq!(total, 3);
            assert!(mensaje.contains("2024-02-05"));
        }
        DefinirPosturasResultado::Rechazado { errores_filas } => {
            panic!("No debía rechazarse: {:?}", errores_filas)
        }
    }

    let posturas = state.postura_api.posturas_actuales(fecha, turno).unwrap();
    let numeros: Vec<u32> = posturas.iter().map(|p| p.numero_postura).collect();
    assert_eq!(numeros, vec![1, 2, 3]);
}

#[test]
fn test_reenvio_identico_es_idempotente() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    let (fecha, turno) = fecha_turno();

    let filas = vec![
        test_helpers::fila_postura_mina(),
        test_helpers::fila_postura_no_mina(),
    ];

    for _ in 0..2 {
        let resultado = state
            .postura_api
            .definir_posturas(&DefinirPosturasRequest {
                fecha,
                turno,
                filas: filas.clone(),
            })
            .unwrap();
        match resultado {
            DefinirPosturasResultado::Guardado { total, .. } => assert_eq!(total, 2),
            DefinirPosturasResultado::Rechazado { .. } => panic!("Debía guardarse"),
        }
    }

    let posturas = state.postura_api.posturas_actuales(fecha, turno).unwrap();
    assert_eq!(posturas.len(), 2);
    assert_eq!(posturas[0].numero_postura, 1);
    assert_eq!(posturas[1].numero_postura, 2);
}

#[test]
fn test_reemplazo_elimina_viajes_por_cascada() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    let (fecha, turno) = fecha_turno();

    let empleado_id = test_helpers::sembrar_empleado(&state, "0201", "Mario León", "77.777.777-7");
    let maquinaria_id = test_helpers::sembrar_maquinaria(&state, "CT-09", "Camión Tolva");

    state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![test_helpers::fila_postura_mina()],
        })
        .unwrap();

    let opciones = state
        .movimiento_api
        .posturas_del_turno(fecha, turno)
        .unwrap();

    // Movimiento con un viaje contra la postura vigente
    let form = test_helpers::formulario_movimiento(
        fecha,
        turno,
        empleado_id,
        maquinaria_id,
        Some("0"),
        Some("300"),
    );
    let resultado = state
        .movimiento_api
        .crear_movimiento(&CrearMovimientoRequest {
            movimiento: form,
            viajes: vec![ViajeFormulario {
                postura_id: opciones[0].id,
                cantidad: Some("6".to_string()),
                modificado: true,
            }],
        })
        .unwrap();
    assert!(matches!(
        resultado,
        CrearMovimientoResultado::Guardado { viajes_guardados: 1, .. }
    ));

    let repo = MovimientoRepository::new(&db_path).unwrap();
    assert_eq!(repo.contar_viajes().unwrap(), 1);

    // Redefinir el set borra las posturas previas y arrastra los viajes
    state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![test_helpers::fila_postura_no_mina()],
        })
        .unwrap();

    assert_eq!(repo.contar_viajes().unwrap(), 0);
}

#[test]
fn test_fila_invalida_no_toca_el_set_anterior() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    let (fecha, turno) = fecha_turno();

    state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![test_helpers::fila_postura_mina()],
        })
        .unwrap();

    // Segunda fila con origen de mina sin sector: inválida
    let mut invalida = test_helpers::fila_postura_mina();
    invalida.origen = CodigoLugar::LaM;
    invalida.sector_banco = None;
    invalida.sector_tiro = None;

    let resultado = state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![test_helpers::fila_postura_no_mina(), invalida],
        })
        .unwrap();

    match resultado {
        DefinirPosturasResultado::Rechazado { errores_filas } => {
            assert_eq!(errores_filas.len(), 2);
            assert!(errores_filas[0].esta_vacio());
            assert_eq!(errores_filas[1].total(), 2);
        }
        DefinirPosturasResultado::Guardado { .. } => panic!("Debía rechazarse"),
    }

    // El set anterior sigue intacto
    let posturas = state.postura_api.posturas_actuales(fecha, turno).unwrap();
    assert_eq!(posturas.len(), 1);
    assert_eq!(posturas[0].origen, CodigoLugar::Ta);
}

#[test]
fn test_filas_eliminadas_o_sin_cambios_quedan_fuera() {
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    let (fecha, turno) = fecha_turno();

    let mut eliminada = test_helpers::fila_postura_mina();
    eliminada.eliminar = true;
    let mut sin_cambios = test_helpers::fila_postura_no_mina();
    sin_cambios.modificado = false;
    // Una fila eliminada inválida tampoco bloquea el guardado
    let mut eliminada_invalida = test_helpers::fila_postura_mina();
    eliminada_invalida.eliminar = true;
    eliminada_invalida.sector_banco = None;

    let resultado = state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![
                eliminada,
                test_helpers::fila_postura_mina(),
                sin_cambios,
                eliminada_invalida,
            ],
        })
        .unwrap();

    match resultado {
        DefinirPosturasResultado::Guardado { total, .. } => assert_eq!(total, 1),
        DefinirPosturasResultado::Rechazado { .. } => panic!("Debía guardarse"),
    }

    let posturas = state.postura_api.posturas_actuales(fecha, turno).unwrap();
    assert_eq!(posturas.len(), 1);
    assert_eq!(posturas[0].numero_postura, 1);
}
