// ==========================================
// Test E2E - Flujo completo de un turno
// ==========================================
// Objetivo: recorrer el ciclo real de operación de un turno:
// definir posturas → registrar movimientos con viajes y combustible →
// guardar jefatura y producción → informe agregado → exportación.
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use gestion_flota::api::movimiento_api::{CrearMovimientoRequest, CrearMovimientoResultado};
use gestion_flota::api::postura_api::DefinirPosturasRequest;
use gestion_flota::api::produccion_api::EntradaProduccion;
use gestion_flota::domain::informe::{DespachoMateriales, ProduccionEquipoDatos, ViajesAljibe};
use gestion_flota::domain::types::{EmpresaSupervisor, OrigenCombustible, Turno};
use gestion_flota::engine::movimiento_rules::ViajeFormulario;
use gestion_flota::logging;

#[test]
fn test_flujo_completo_de_turno() {
    logging::init_test();

    println!("\n=== Test: flujo completo de un turno ===");

    // Paso 1: base y estado
    let (_temp, db_path) = test_helpers::create_test_db();
    let state = test_helpers::crear_estado(&db_path);
    println!("✓ Paso 1: base de datos y AppState listos");

    // Paso 2: maestros del turno
    let fecha = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let turno = Turno::Dia;

    let operador_cf =
        test_helpers::sembrar_empleado(&state, "1001", "Camila Núñez", "20.100.100-1");
    let operador_ct =
        test_helpers::sembrar_empleado(&state, "1002", "Bruno Salas", "20.200.200-2");
    let operador_ca =
        test_helpers::sembrar_empleado(&state, "1003", "Gema Ortiz", "20.300.300-3");
    let cargador = test_helpers::sembrar_maquinaria(&state, "CF-10", "Cargador Frontal");
    let tolva = test_helpers::sembrar_maquinaria(&state, "CT-10", "Camión Tolva");
    let aljibe = test_helpers::sembrar_maquinaria(&state, "CA-10", "Camión Aljibe");
    let lider = test_helpers::sembrar_supervisor(&state, "Paula Ried", EmpresaSupervisor::Tirreno);
    let jefe = test_helpers::sembrar_supervisor(&state, "Marco Soto", EmpresaSupervisor::Mandante);
    println!("✓ Paso 2: personal, flota y supervisores sembrados");

    // Paso 3: posturas del turno
    state
        .postura_api
        .definir_posturas(&DefinirPosturasRequest {
            fecha,
            turno,
            filas: vec![
                test_helpers::fila_postura_mina(),
                test_helpers::fila_postura_no_mina(),
            ],
        })
        .unwrap();
    let opciones = state
        .movimiento_api
        .posturas_del_turno(fecha, turno)
        .unwrap();
    assert_eq!(opciones.len(), 2);
    println!("✓ Paso 3: {} posturas definidas", opciones.len());

    // Paso 4: movimientos del turno (cargador con combustible, tolva
    // con viajes, aljibe con turno abierto)
    let mut mov_cargador = test_helpers::formulario_movimiento(
        fecha, turno, operador_cf, cargador, Some("100"), Some("460"),
    );
    mov_cargador.combustible_cargado = Some(50.0);
    mov_cargador.origen_combustible = Some(OrigenCombustible::CamionCombustible);

    let mov_tolva = test_helpers::formulario_movimiento(
        fecha, turno, operador_ct, tolva, Some("2000"), Some("2420"),
    );
    let mov_aljibe = test_helpers::formulario_movimiento(
        fecha, turno, operador_ca, aljibe, Some("500"), None,
    );

    let resultado = state
        .movimiento_api
        .crear_movimiento(&CrearMovimientoRequest {
            movimiento: mov_cargador,
            viajes: Vec::new(),
        })
        .unwrap();
    assert!(matches!(resultado, CrearMovimientoResultado::Guardado { .. }));

    let resultado = state
        .movimiento_api
        .crear_movimiento(&CrearMovimientoRequest {
            movimiento: mov_tolva,
            viajes: vec![
                ViajeFormulario {
                    postura_id: opciones[0].id,
                    cantidad: Some("14".to_string()),
                    modificado: true,
                },
                ViajeFormulario {
                    postura_id: opciones[1].id,
                    cantidad: Some("6".to_string()),
                    modificado: true,
                },
            ],
        })
        .unwrap();
    match resultado {
        CrearMovimientoResultado::Guardado { viajes_guardados, .. } => {
            assert_eq!(viajes_guardados, 2)
        }
        CrearMovimientoResultado::Rechazado { .. } => panic!("El movimiento de tolva era válido"),
    }

    let resultado = state
        .movimiento_api
        .crear_movimiento(&CrearMovimientoRequest {
            movimiento: mov_aljibe,
            viajes: Vec::new(),
        })
        .unwrap();
    assert!(matches!(resultado, CrearMovimientoResultado::Guardado { .. }));
    println!("✓ Paso 4: 3 movimientos registrados");

    // Paso 5: jefatura y producción
    state
        .produccion_api
        .guardar_lideres(fecha, turno, Some(lider), Some(jefe))
        .unwrap();

    let mut aljibe_viajes = ViajesAljibe::default();
    aljibe_viajes.viajes[0] = Some("Riego caminos".to_string());
    aljibe_viajes.viajes[1] = Some("Riego botadero".to_string());

    let guardados = state
        .produccion_api
        .guardar_produccion(
            fecha,
            turno,
            &[
                EntradaProduccion {
                    maquinaria_id: cargador,
                    datos: ProduccionEquipoDatos {
                        despacho_fabrica: Some(DespachoMateriales {
                            cemento: Some("8".to_string()),
                            normal: Some("15".to_string()),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                },
                EntradaProduccion {
                    maquinaria_id: aljibe,
                    datos: ProduccionEquipoDatos {
                        camion_aljibe: Some(aljibe_viajes),
                        ..Default::default()
                    },
                },
            ],
        )
        .unwrap();
    assert_eq!(guardados, 2);
    println!("✓ Paso 5: jefatura y producción guardadas");

    // Paso 6: informe agregado del turno
    let contexto = state
        .produccion_api
        .informe_produccion(fecha, turno)
        .unwrap();

    assert_eq!(contexto.informe.lider_tirreno_id, Some(lider));
    assert_eq!(contexto.informe.jefe_mandante_id, Some(jefe));
    assert_eq!(contexto.resumen.equipos_pesados.len(), 1);
    assert_eq!(contexto.resumen.camiones_tolva.len(), 1);
    assert_eq!(contexto.resumen.camiones_aljibe.len(), 1);

    let ficha_cargador = &contexto.resumen.equipos_pesados[0];
    let stats = ficha_cargador.estadisticas.as_ref().unwrap();
    assert_eq!(stats.total_horas, Some(6.00));
    assert_eq!(stats.total_combustible, Some(50.0));
    assert_eq!(ficha_cargador.despacho_fabrica.cemento.as_deref(), Some("8"));

    // El aljibe quedó con turno abierto: sin lectura final ni horas
    let ficha_aljibe = &contexto.resumen.camiones_aljibe[0];
    let stats_aljibe = ficha_aljibe.estadisticas.as_ref().unwrap();
    assert_eq!(stats_aljibe.hora_inicio, Some(500));
    assert_eq!(stats_aljibe.hora_termino, None);
    assert_eq!(stats_aljibe.total_horas, None);
    assert_eq!(ficha_aljibe.casillas[0].valor, "Riego caminos");
    assert_eq!(ficha_aljibe.casillas[3].valor, "");
    println!("✓ Paso 6: informe agregado verificado");

    // Paso 7: reporte diario y exportación
    let reporte = state.movimiento_api.reporte_diario(fecha).unwrap();
    assert_eq!(reporte.filas.len(), 3);

    let documento = state.produccion_api.contexto_pdf(fecha, turno).unwrap();
    assert_eq!(
        documento.nombre_archivo,
        "informe_produccion_2024-06-20_Día.pdf"
    );
    println!("✓ Paso 7: reporte diario y PDF exportados");

    println!("=== Flujo completo OK ===\n");
}
