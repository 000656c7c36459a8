//! gRPC protocol buffer definitions of the forest RPC facade.
//!
//! - CrudZones: zone create/read/update/delete
//! - CrudSpecies: tree species CRUD plus reference lists
//! - SpeciesReport: conservation reporting

/// Zone facade definitions.
pub mod zones {
    tonic::include_proto!("forest.zones");
}

/// Species facade definitions.
pub mod species {
    tonic::include_proto!("forest.species");
}

// Re-export commonly used items
pub use species::crud_species_client::CrudSpeciesClient;
pub use species::crud_species_server::{CrudSpecies, CrudSpeciesServer};
pub use species::species_report_client::SpeciesReportClient;
pub use species::species_report_server::{SpeciesReport, SpeciesReportServer};
pub use zones::crud_zones_client::CrudZonesClient;
pub use zones::crud_zones_server::{CrudZones, CrudZonesServer};
