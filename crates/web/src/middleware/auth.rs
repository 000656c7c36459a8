//! Authorization gate.

use axum::{
    body::Body,
    extract::{Extension, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use tracing::{debug, error};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::UserRole;

use super::session::{SessionUser, SESSION_COOKIE};
use crate::state::AppState;

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// The authenticated user of the current request, resolved from the session.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    #[serde(skip)]
    pub session_id: Uuid,
    pub user_id: i32,
    pub username: String,
    pub full_name: Option<String>,
    /// `None` when the stored role is not recognized
    pub role: Option<UserRole>,
}

impl CurrentUser {
    pub fn from_session(session_id: Uuid, user: SessionUser) -> Self {
        Self {
            session_id,
            user_id: user.user_id,
            role: UserRole::from_label(&user.role),
            username: user.username,
            full_name: user.full_name,
        }
    }

    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|role| role.is_admin())
    }
}

/// Check if user has admin privileges.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Session id carried by the request cookie, if it parses.
pub fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Gate for every non-public route: requests without a live session are
/// redirected to the login page.
pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(id) = session_id(&jar) else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match state.sessions.get(&id).await {
        Ok(Some(user)) => {
            request
                .extensions_mut()
                .insert(CurrentUser::from_session(id, user));
            next.run(request).await
        }
        Ok(None) => {
            debug!(session = %id, "Unknown session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        Err(err) => {
            error!(error = ?err, "Session lookup failed");
            err.into_response()
        }
    }
}

/// Gate for admin-only pages. Runs inside [`session_gate`].
pub async fn admin_gate(
    Extension(current_user): Extension<CurrentUser>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    require_admin(&current_user)?;
    Ok(next.run(request).await)
}
