//! Tree species page.

use std::sync::Arc;

use common::AppError;
use domain::TreeSpecies;
use forest_service_lib::service::{CatalogService, Services};

use super::catalog_handler::{CatalogPage, Reference};
use crate::extractors::{FieldErrors, FormFields};

pub struct TreeSpeciesPage;

impl CatalogPage for TreeSpeciesPage {
    type Record = TreeSpecies;

    const PATH: &'static str = "/treespecies";
    const LIST_VIEW: &'static str = "treespecies";
    const FORM_VIEW: &'static str = "treespecies_form";
    const REFERENCES: &'static [Reference] = &[Reference::Zones, Reference::ConservationStates];

    fn service(services: &Services) -> Arc<dyn CatalogService<TreeSpecies>> {
        services.species()
    }

    fn from_form(form: &FormFields) -> (TreeSpecies, Option<AppError>) {
        let mut errors = FieldErrors::default();
        let species = TreeSpecies {
            id: errors.keep(form.record_id()),
            common_name: form.text("nombreComun"),
            scientific_name: form.optional_text("nombreCientifico"),
            conservation_state_id: errors.keep(form.optional_int("estadoConservacionId")),
            zone_id: errors.keep(form.optional_int("zonaId")),
            active: form.has("activo"),
        };
        (species, errors.first())
    }
}
