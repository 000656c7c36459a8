//! gRPC implementation of CrudZones.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{error, info, warn};

use domain::{ForestType, Zone, MSG_ZONE_DUPLICATE};
use proto::zones::{
    crud_zones_server::CrudZones, BoolResult, CreateZoneRequest, GetAllZonesRequest,
    UpdateZoneRequest, ZoneIdRequest, ZoneList, ZoneReply,
};

use super::outcome;
use crate::service::CatalogService;

/// gRPC service wrapper for the zone catalog.
///
/// Zone names are unique among active zones here; the web surface does not
/// check them.
pub struct ZonesGrpcService {
    zones: Arc<dyn CatalogService<Zone>>,
}

impl ZonesGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(zones: Arc<dyn CatalogService<Zone>>) -> Self {
        Self { zones }
    }

    /// `false` when the name is taken or the check itself fails.
    async fn name_available(&self, zone: &Zone) -> bool {
        match self.zones.name_in_use(&zone.name, zone.id).await {
            Ok(false) => true,
            Ok(true) => {
                warn!(name = %zone.name, "{}", MSG_ZONE_DUPLICATE);
                false
            }
            Err(err) => {
                error!(error = ?err, "Zone name check failed");
                false
            }
        }
    }
}

#[tonic::async_trait]
impl CrudZones for ZonesGrpcService {
    async fn create_zone(
        &self,
        request: Request<CreateZoneRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let req = request.into_inner();
        info!(nombre = %req.nombre, "Creating zone");

        // The active flag is ignored: new zones are always active
        let zone = zone_from_wire(0, req.nombre, &req.tipo_bosque, req.area_ha);
        let success =
            self.name_available(&zone).await && outcome("create_zone", self.zones.create(zone).await);

        Ok(Response::new(BoolResult { success }))
    }

    async fn get_all_zones(
        &self,
        _request: Request<GetAllZonesRequest>,
    ) -> Result<Response<ZoneList>, Status> {
        let zones = self.zones.list_all().await.map_err(Status::from)?;
        let zones = zones.iter().map(zone_to_proto).collect();

        Ok(Response::new(ZoneList { zones }))
    }

    async fn get_zone_by_id(
        &self,
        request: Request<ZoneIdRequest>,
    ) -> Result<Response<ZoneReply>, Status> {
        let id = request.into_inner().id;

        let zone = self
            .zones
            .get_by_id(id)
            .await
            .map_err(Status::from)?
            .ok_or_else(|| Status::not_found(format!("Zone not found with id {}", id)))?;
        Ok(Response::new(zone_to_proto(&zone)))
    }

    async fn update_zone(
        &self,
        request: Request<UpdateZoneRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let req = request.into_inner();
        info!(id = req.id, "Updating zone");

        let zone = zone_from_wire(req.id, req.nombre, &req.tipo_bosque, req.area_ha);
        let success =
            self.name_available(&zone).await && outcome("update_zone", self.zones.update(zone).await);

        Ok(Response::new(BoolResult { success }))
    }

    async fn delete_zone(
        &self,
        request: Request<ZoneIdRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let id = request.into_inner().id;
        info!(id, "Deleting zone");

        let success = match self.zones.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => outcome::<()>("delete_zone", Err(err)),
        };
        Ok(Response::new(BoolResult { success }))
    }
}

/// Build a zone from flat wire fields. A blank forest type counts as missing.
fn zone_from_wire(id: i32, name: String, forest_type: &str, area_ha: f64) -> Zone {
    Zone {
        id,
        name,
        forest_type: (!forest_type.trim().is_empty()).then(|| ForestType::parse(forest_type)),
        area_ha: Some(area_ha),
        active: true,
    }
}

fn zone_to_proto(zone: &Zone) -> ZoneReply {
    ZoneReply {
        id: zone.id,
        nombre: zone.name.clone(),
        tipo_bosque: zone.forest_type_name().to_string(),
        area_ha: zone.area_ha.unwrap_or_default(),
        activo: zone.active,
    }
}
