//! Activity type page.

use std::sync::Arc;

use common::AppError;
use domain::ActivityType;
use forest_service_lib::service::{CatalogService, Services};

use super::catalog_handler::CatalogPage;
use crate::extractors::{FieldErrors, FormFields};

pub struct ActivityTypesPage;

impl CatalogPage for ActivityTypesPage {
    type Record = ActivityType;

    const PATH: &'static str = "/tipoactividad";
    const LIST_VIEW: &'static str = "tipo_actividad";
    const FORM_VIEW: &'static str = "tipo_actividad_form";

    fn service(services: &Services) -> Arc<dyn CatalogService<ActivityType>> {
        services.activity_types()
    }

    fn from_form(form: &FormFields) -> (ActivityType, Option<AppError>) {
        let mut errors = FieldErrors::default();
        let kind = ActivityType {
            id: errors.keep(form.record_id()),
            name: form.text("nombreTipoActividad"),
            description: form.text("descripcionTipoActividad"),
            active: form.has("activo"),
        };
        (kind, errors.first())
    }
}
