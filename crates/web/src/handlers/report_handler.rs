//! Reports dashboard.

use axum::{
    extract::{Extension, State},
    response::Response,
    routing::get,
    Router,
};
use tracing::error;

use domain::Dashboard;

use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::views::View;

pub fn report_routes() -> Router<AppState> {
    Router::new().route("/reportes", get(reports_page))
}

/// Every active list plus the conservation counters.
pub async fn reports_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Response {
    let view = View::new("reportes").with("current_user", &current_user);

    let view = match state.services.reports().dashboard().await {
        Ok(dashboard) => dashboard_view(view, &dashboard),
        Err(err) => {
            error!(error = ?err, "Failed to load dashboard");
            dashboard_view(view, &Dashboard::default()).with_error(Some(err.user_message()))
        }
    };
    state.render(view)
}

fn dashboard_view(view: View, dashboard: &Dashboard) -> View {
    view.with("species", &dashboard.species)
        .with("zones", &dashboard.zones)
        .with("activities", &dashboard.activities)
        .with("states", &dashboard.states)
        .with("activity_types", &dashboard.activity_types)
        .with("statistics", &dashboard.statistics)
}
