//! Route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{
    auth_routes, catalog_routes, health_routes, index_admin_page, landing_routes, report_routes,
    user_routes, ActivityTypesPage, ConservationActivitiesPage, TreeSpeciesPage, ZonesPage,
};
use crate::middleware::{admin_gate, session_gate};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let assets = state.config.assets_dir.clone();

    // Admin-only pages
    let admin = Router::new()
        .route("/indexadmin", get(index_admin_page))
        .merge(user_routes())
        .route_layer(middleware::from_fn(admin_gate));

    // Everything that needs a session
    let protected = Router::new()
        .merge(landing_routes())
        .merge(catalog_routes::<ZonesPage>())
        .merge(catalog_routes::<TreeSpeciesPage>())
        .merge(catalog_routes::<ConservationActivitiesPage>())
        .merge(catalog_routes::<ActivityTypesPage>())
        .merge(report_routes())
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state.clone(), session_gate));

    Router::new()
        // Public: health, login/logout, static assets
        .merge(health_routes())
        .merge(auth_routes())
        .nest_service("/css", ServeDir::new(assets.join("css")))
        .nest_service("/js", ServeDir::new(assets.join("js")))
        .nest_service("/images", ServeDir::new(assets.join("images")))
        .merge(protected)
        .with_state(state)
}
