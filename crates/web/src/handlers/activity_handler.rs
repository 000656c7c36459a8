//! Conservation activity page.

use std::sync::Arc;

use common::AppError;
use domain::ConservationActivity;
use forest_service_lib::service::{CatalogService, Services};

use super::catalog_handler::{CatalogPage, Reference};
use crate::extractors::{FieldErrors, FormFields};

pub struct ConservationActivitiesPage;

impl CatalogPage for ConservationActivitiesPage {
    type Record = ConservationActivity;

    const PATH: &'static str = "/conservationactivities";
    const LIST_VIEW: &'static str = "conservation_activities";
    const FORM_VIEW: &'static str = "conservation_activities_form";
    const REFERENCES: &'static [Reference] = &[Reference::Zones, Reference::ActivityTypes];

    fn service(services: &Services) -> Arc<dyn CatalogService<ConservationActivity>> {
        services.activities()
    }

    /// The date is kept exactly as typed.
    fn from_form(form: &FormFields) -> (ConservationActivity, Option<AppError>) {
        let mut errors = FieldErrors::default();
        let activity = ConservationActivity {
            id: errors.keep(form.record_id()),
            name: form.text("nombreActividad"),
            date: form.text("fechaActividad"),
            responsible: form.text("responsable"),
            activity_type_id: errors.keep(form.optional_int("tipoActividadId")),
            zone_id: errors.keep(form.optional_int("zonaId")),
            active: form.has("activo"),
        };
        (activity, errors.first())
    }
}
