//! RPC facade tests over in-memory repositories.

use std::sync::Arc;

use tokio_test::assert_ok;
use tonic::{Code, Request};

use domain::ConservationState;
use forest_service_lib::grpc::{ReportGrpcService, SpeciesGrpcService, ZonesGrpcService};
use forest_service_lib::repository::MemoryCatalog;
use forest_service_lib::service::{Repositories, Services};
use proto::species::{
    ConservationStateIdRequest, CreateTreeSpeciesRequest, Empty, SpeciesIdRequest,
    UpdateTreeSpeciesRequest,
};
use proto::zones::{CreateZoneRequest, GetAllZonesRequest, UpdateZoneRequest, ZoneIdRequest};
use proto::{CrudSpecies, CrudZones, SpeciesReport};

fn services() -> Services {
    let states = vec![
        ConservationState {
            id: 1,
            name: "Vulnerable".into(),
            description: Some("Riesgo alto".into()),
            active: true,
        },
        ConservationState {
            id: 2,
            name: "En peligro".into(),
            description: None,
            active: true,
        },
    ];

    let mut repos = Repositories::in_memory();
    repos.states = Arc::new(MemoryCatalog::seeded(states).ordered_by_name());
    Services::new(repos)
}

fn zone_request(nombre: &str, tipo_bosque: &str, area_ha: f64) -> Request<CreateZoneRequest> {
    Request::new(CreateZoneRequest {
        nombre: nombre.to_string(),
        tipo_bosque: tipo_bosque.to_string(),
        area_ha,
        activo: false,
    })
}

fn species_request(nombre: &str, zona_id: Option<i32>, estado: Option<i32>) -> Request<CreateTreeSpeciesRequest> {
    Request::new(CreateTreeSpeciesRequest {
        nombre_comun: nombre.to_string(),
        nombre_cientifico: None,
        estado_conservacion_id: estado,
        zona_id,
        activo: true,
    })
}

#[tokio::test]
async fn create_zone_ignores_active_flag_and_lists_display_name() {
    let zones = ZonesGrpcService::new(services().zones());

    let created = zones
        .create_zone(zone_request("Bosque Norte", "seco", 12.5))
        .await
        .unwrap()
        .into_inner();
    assert!(created.success);

    let list = zones
        .get_all_zones(Request::new(GetAllZonesRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(list.zones.len(), 1);
    assert_eq!(list.zones[0].tipo_bosque, "Seco");
    assert!(list.zones[0].activo);
}

#[tokio::test]
async fn zone_mutations_report_false_on_rejection() {
    let zones = ZonesGrpcService::new(services().zones());
    assert!(zones.create_zone(zone_request("Sur", "Montano", 3.0)).await.unwrap().into_inner().success);

    let cases = [
        zone_request("SUR", "Montano", 3.0),
        zone_request("Este", "", 3.0),
        zone_request("Este", "Manglar", 0.0),
        zone_request("  ", "Manglar", 1.0),
    ];
    for request in cases {
        assert!(!zones.create_zone(request).await.unwrap().into_inner().success);
    }

    let update = UpdateZoneRequest {
        id: 77,
        nombre: "Oeste".into(),
        tipo_bosque: "Otro".into(),
        area_ha: 1.0,
        activo: true,
    };
    assert!(!zones.update_zone(Request::new(update)).await.unwrap().into_inner().success);
}

#[tokio::test]
async fn unknown_forest_type_falls_back_to_other() {
    let zones = ZonesGrpcService::new(services().zones());
    assert!(zones.create_zone(zone_request("Centro", "bogus", 2.0)).await.unwrap().into_inner().success);

    let zone = zones
        .get_zone_by_id(Request::new(ZoneIdRequest { id: 1 }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(zone.tipo_bosque, "Otro");
}

#[tokio::test]
async fn deleted_zone_leaves_list_but_stays_readable_by_id() {
    let zones = ZonesGrpcService::new(services().zones());
    assert!(zones.create_zone(zone_request("Alto", "Montano", 8.0)).await.unwrap().into_inner().success);

    let deleted = zones.delete_zone(Request::new(ZoneIdRequest { id: 1 })).await.unwrap();
    assert!(deleted.into_inner().success);

    let list = zones.get_all_zones(Request::new(GetAllZonesRequest {})).await.unwrap();
    assert!(list.into_inner().zones.is_empty());

    let zone = assert_ok!(zones.get_zone_by_id(Request::new(ZoneIdRequest { id: 1 })).await);
    assert!(!zone.into_inner().activo);

    let missing = zones.delete_zone(Request::new(ZoneIdRequest { id: 9 })).await.unwrap();
    assert!(!missing.into_inner().success);
}

#[tokio::test]
async fn updating_a_deleted_zone_keeps_it_deleted() {
    let zones = ZonesGrpcService::new(services().zones());
    assert!(zones.create_zone(zone_request("Alto", "Montano", 8.0)).await.unwrap().into_inner().success);
    assert!(zones.delete_zone(Request::new(ZoneIdRequest { id: 1 })).await.unwrap().into_inner().success);

    let update = UpdateZoneRequest {
        id: 1,
        nombre: " Alto Andino ".into(),
        tipo_bosque: "Manglar".into(),
        area_ha: 9.5,
        activo: true,
    };
    assert!(zones.update_zone(Request::new(update)).await.unwrap().into_inner().success);

    let list = zones.get_all_zones(Request::new(GetAllZonesRequest {})).await.unwrap();
    assert!(list.into_inner().zones.is_empty());

    let zone = zones
        .get_zone_by_id(Request::new(ZoneIdRequest { id: 1 }))
        .await
        .unwrap()
        .into_inner();
    assert!(!zone.activo);
    assert_eq!(zone.nombre, "Alto Andino");
    assert_eq!(zone.tipo_bosque, "Manglar");
}

#[tokio::test]
async fn missing_zone_is_not_found() {
    let zones = ZonesGrpcService::new(services().zones());

    let status = zones
        .get_zone_by_id(Request::new(ZoneIdRequest { id: 5 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn species_reads_carry_zone_and_state_names() {
    let services = services();
    let zones = ZonesGrpcService::new(services.zones());
    let species = SpeciesGrpcService::new(services.species(), services.zones(), services.states());

    assert!(zones.create_zone(zone_request("Ribera", "Manglar", 4.0)).await.unwrap().into_inner().success);
    assert!(species
        .create_tree_species(species_request("Mangle rojo", Some(1), Some(2)))
        .await
        .unwrap()
        .into_inner()
        .success);

    let list = species
        .get_all_tree_species(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(list.species.len(), 1);
    assert_eq!(list.species[0].zona_nombre, "Ribera");
    assert_eq!(list.species[0].estado_conservacion, "En peligro");

    let one = species
        .get_tree_species_by_id(Request::new(SpeciesIdRequest { id: 1 }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(one.nombre_comun, "Mangle rojo");

    let status = species
        .get_tree_species_by_id(Request::new(SpeciesIdRequest { id: 2 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn species_duplicates_are_rejected_ignoring_case() {
    let services = services();
    let species = SpeciesGrpcService::new(services.species(), services.zones(), services.states());

    assert!(species.create_tree_species(species_request("Ceibo", None, None)).await.unwrap().into_inner().success);
    assert!(species.create_tree_species(species_request("Laurel", None, None)).await.unwrap().into_inner().success);
    assert!(!species.create_tree_species(species_request("ceibo", None, None)).await.unwrap().into_inner().success);

    let rename = UpdateTreeSpeciesRequest {
        id: 2,
        nombre_comun: "CEIBO".into(),
        nombre_cientifico: None,
        estado_conservacion_id: None,
        zona_id: None,
        activo: true,
    };
    assert!(!species.update_tree_species(Request::new(rename)).await.unwrap().into_inner().success);

    let keep = UpdateTreeSpeciesRequest {
        id: 2,
        nombre_comun: "laurel".into(),
        nombre_cientifico: Some("Laurus nobilis".into()),
        estado_conservacion_id: Some(1),
        zona_id: None,
        activo: true,
    };
    assert!(species.update_tree_species(Request::new(keep)).await.unwrap().into_inner().success);
}

#[tokio::test]
async fn reference_lists_and_reports() {
    let services = services();
    let species = SpeciesGrpcService::new(services.species(), services.zones(), services.states());
    let reports = ReportGrpcService::new(services.reports());

    let states = species
        .get_all_conservation_states(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    let names: Vec<_> = states.states.iter().map(|s| s.nombre.as_str()).collect();
    assert_eq!(names, vec!["En peligro", "Vulnerable"]);

    for (name, state) in [("Cedro", Some(1)), ("Roble", None), ("Caoba", Some(1))] {
        let created = species.create_tree_species(species_request(name, None, state)).await.unwrap();
        assert!(created.into_inner().success);
    }

    let stats = reports
        .get_conservation_statistics(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(stats.total_active_species, 3);
    assert_eq!(stats.species_in_conservation, 2);
    assert_eq!(stats.species_without_conservation_status, 1);
    assert_eq!(stats.total_conservation_states, 2);

    let vulnerable = reports
        .get_species_by_conservation_state(Request::new(ConservationStateIdRequest { estado_id: 1 }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(vulnerable.species.len(), 2);
    assert!(vulnerable.species.iter().all(|s| s.estado_conservacion == "Vulnerable"));
}
