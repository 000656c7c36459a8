//! gRPC implementation of SpeciesReport.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use proto::species::{
    species_report_server::SpeciesReport, ConservationSpeciesInfo, ConservationSpeciesList,
    ConservationStateIdRequest, ConservationStatistics, Empty,
};

use super::wire_count;
use crate::service::ReportService;

/// gRPC service wrapper for the conservation reports.
pub struct ReportGrpcService {
    reports: Arc<dyn ReportService>,
}

impl ReportGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(reports: Arc<dyn ReportService>) -> Self {
        Self { reports }
    }
}

#[tonic::async_trait]
impl SpeciesReport for ReportGrpcService {
    async fn get_species_in_conservation(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ConservationSpeciesList>, Status> {
        let species = self
            .reports
            .species_in_conservation()
            .await
            .map_err(Status::from)?;

        Ok(Response::new(ConservationSpeciesList {
            species: species.into_iter().map(info_to_proto).collect(),
        }))
    }

    async fn get_species_by_conservation_state(
        &self,
        request: Request<ConservationStateIdRequest>,
    ) -> Result<Response<ConservationSpeciesList>, Status> {
        let state_id = request.into_inner().estado_id;

        let species = self
            .reports
            .species_by_conservation_state(state_id)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(ConservationSpeciesList {
            species: species.into_iter().map(info_to_proto).collect(),
        }))
    }

    async fn get_conservation_statistics(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ConservationStatistics>, Status> {
        let stats = self
            .reports
            .conservation_statistics()
            .await
            .map_err(Status::from)?;

        Ok(Response::new(ConservationStatistics {
            total_active_species: wire_count(stats.total_active_species),
            species_in_conservation: wire_count(stats.species_in_conservation),
            species_without_conservation_status: wire_count(
                stats.species_without_conservation_status,
            ),
            total_conservation_states: wire_count(stats.total_conservation_states),
        }))
    }
}

fn info_to_proto(info: domain::ConservationSpeciesInfo) -> ConservationSpeciesInfo {
    ConservationSpeciesInfo {
        id: info.id,
        nombre_comun: info.common_name,
        nombre_cientifico: info.scientific_name.unwrap_or_default(),
        zona_id: info.zone_id,
        estado_conservacion_id: info.conservation_state_id,
        estado_conservacion: info.conservation_state,
    }
}
