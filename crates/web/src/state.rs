//! Application state for dependency injection.

use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};

use forest_service_lib::infra::Database;
use forest_service_lib::service::Services;

use crate::config::WebConfig;
use crate::middleware::SessionStore;
use crate::views::{View, ViewRenderer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub sessions: Arc<dyn SessionStore>,
    pub views: Arc<dyn ViewRenderer>,
    /// Pinged by the health check when present
    pub database: Option<Arc<Database>>,
    pub config: WebConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        services: Services,
        sessions: Arc<dyn SessionStore>,
        views: Arc<dyn ViewRenderer>,
        config: WebConfig,
    ) -> Self {
        Self {
            services,
            sessions,
            views,
            database: None,
            config,
        }
    }

    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }

    /// Render a view into an HTML response.
    pub fn render(&self, view: View) -> Response {
        Html(self.views.render(&view)).into_response()
    }
}
