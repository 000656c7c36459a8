//! gRPC implementation of CrudSpecies.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::info;

use domain::{ConservationState, TreeSpecies, Zone};
use proto::species::{
    crud_species_server::CrudSpecies, BoolResult, ConservationStateInfo, ConservationStateList,
    CreateTreeSpeciesRequest, Empty, SpeciesIdRequest, TreeSpeciesList, TreeSpeciesReply,
    UpdateTreeSpeciesRequest, ZoneInfo, ZoneInfoList,
};

use super::outcome;
use crate::service::CatalogService;

/// gRPC service wrapper for the species catalog and its reference lists.
pub struct SpeciesGrpcService {
    species: Arc<dyn CatalogService<TreeSpecies>>,
    zones: Arc<dyn CatalogService<Zone>>,
    states: Arc<dyn CatalogService<ConservationState>>,
}

impl SpeciesGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(
        species: Arc<dyn CatalogService<TreeSpecies>>,
        zones: Arc<dyn CatalogService<Zone>>,
        states: Arc<dyn CatalogService<ConservationState>>,
    ) -> Self {
        Self {
            species,
            zones,
            states,
        }
    }

    /// Active zones and states used to resolve display names.
    async fn lookups(&self) -> Result<(Vec<Zone>, Vec<ConservationState>), Status> {
        futures::try_join!(self.zones.list_all(), self.states.list_all()).map_err(Status::from)
    }
}

#[tonic::async_trait]
impl CrudSpecies for SpeciesGrpcService {
    async fn create_tree_species(
        &self,
        request: Request<CreateTreeSpeciesRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let req = request.into_inner();
        info!(nombre_comun = %req.nombre_comun, "Creating tree species");

        let species = TreeSpecies {
            id: 0,
            common_name: req.nombre_comun,
            scientific_name: req.nombre_cientifico,
            conservation_state_id: req.estado_conservacion_id,
            zone_id: req.zona_id,
            active: req.activo,
        };
        let success = outcome("create_tree_species", self.species.create(species).await);

        Ok(Response::new(BoolResult { success }))
    }

    async fn get_all_tree_species(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<TreeSpeciesList>, Status> {
        let species = self.species.list_all().await.map_err(Status::from)?;
        let (zones, states) = self.lookups().await?;

        let species = species
            .iter()
            .map(|s| species_to_proto(s, &zones, &states))
            .collect();
        Ok(Response::new(TreeSpeciesList { species }))
    }

    async fn get_tree_species_by_id(
        &self,
        request: Request<SpeciesIdRequest>,
    ) -> Result<Response<TreeSpeciesReply>, Status> {
        let id = request.into_inner().id;

        let species = self
            .species
            .get_by_id(id)
            .await
            .map_err(Status::from)?
            .ok_or_else(|| Status::not_found(format!("Tree species not found with id {}", id)))?;
        let (zones, states) = self.lookups().await?;

        Ok(Response::new(species_to_proto(&species, &zones, &states)))
    }

    async fn update_tree_species(
        &self,
        request: Request<UpdateTreeSpeciesRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let req = request.into_inner();
        info!(id = req.id, "Updating tree species");

        let species = TreeSpecies {
            id: req.id,
            common_name: req.nombre_comun,
            scientific_name: req.nombre_cientifico,
            conservation_state_id: req.estado_conservacion_id,
            zone_id: req.zona_id,
            active: req.activo,
        };
        let success = outcome("update_tree_species", self.species.update(species).await);

        Ok(Response::new(BoolResult { success }))
    }

    async fn delete_tree_species(
        &self,
        request: Request<SpeciesIdRequest>,
    ) -> Result<Response<BoolResult>, Status> {
        let id = request.into_inner().id;
        info!(id, "Deleting tree species");

        let success = match self.species.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => outcome::<()>("delete_tree_species", Err(err)),
        };
        Ok(Response::new(BoolResult { success }))
    }

    async fn get_all_zones(&self, _request: Request<Empty>) -> Result<Response<ZoneInfoList>, Status> {
        let zones = self.zones.list_all().await.map_err(Status::from)?;
        let zones = zones
            .into_iter()
            .map(|zone| ZoneInfo {
                id: zone.id,
                tipo_bosque: zone.forest_type_name().to_string(),
                area_ha: zone.area_ha.unwrap_or_default(),
                nombre: zone.name,
            })
            .collect();

        Ok(Response::new(ZoneInfoList { zones }))
    }

    async fn get_all_conservation_states(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ConservationStateList>, Status> {
        let states = self.states.list_all().await.map_err(Status::from)?;
        let states = states
            .into_iter()
            .map(|state| ConservationStateInfo {
                id: state.id,
                nombre: state.name,
                descripcion: state.description.unwrap_or_default(),
            })
            .collect();

        Ok(Response::new(ConservationStateList { states }))
    }
}

/// Flatten a species, resolving zone and state names by scanning the lists.
fn species_to_proto(
    species: &TreeSpecies,
    zones: &[Zone],
    states: &[ConservationState],
) -> TreeSpeciesReply {
    let zona_nombre = species
        .zone_id
        .and_then(|id| zones.iter().find(|zone| zone.id == id))
        .map(|zone| zone.name.clone())
        .unwrap_or_default();
    let estado_conservacion = species
        .conservation_state_id
        .and_then(|id| states.iter().find(|state| state.id == id))
        .map(|state| state.name.clone())
        .unwrap_or_default();

    TreeSpeciesReply {
        id: species.id,
        nombre_comun: species.common_name.clone(),
        nombre_cientifico: species.scientific_name.clone().unwrap_or_default(),
        estado_conservacion_id: species.conservation_state_id,
        zona_id: species.zone_id,
        activo: species.active,
        zona_nombre,
        estado_conservacion,
    }
}
