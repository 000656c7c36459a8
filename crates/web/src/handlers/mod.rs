//! HTTP handlers.

mod activity_handler;
mod activity_type_handler;
mod auth_handler;
mod catalog_handler;
mod health_handler;
mod report_handler;
mod species_handler;
mod user_handler;
mod zone_handler;

pub use activity_handler::ConservationActivitiesPage;
pub use activity_type_handler::ActivityTypesPage;
pub use auth_handler::{
    auth_routes, index_admin_page, landing_path, landing_routes, LoginForm,
};
pub use catalog_handler::{
    catalog_routes, load_references, CatalogPage, CrudOption, CrudParams, Reference,
};
pub use health_handler::health_routes;
pub use report_handler::report_routes;
pub use species_handler::TreeSpeciesPage;
pub use user_handler::user_routes;
pub use zone_handler::{ZonesPage, MSG_AREA_INVALID};
