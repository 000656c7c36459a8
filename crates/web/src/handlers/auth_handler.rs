//! Login, logout and the landing pages.

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::UserRole;

use crate::middleware::{session_id, CurrentUser, SessionUser, LOGIN_PATH, SESSION_COOKIE};
use crate::state::AppState;
use crate::views::View;

const LOGIN_FAILED_PATH: &str = "/login?error=true";
const MSG_LOGIN_FAILED: &str = "Invalid username or password.";

/// Login form fields
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    pub error: Option<String>,
}

/// Public routes: login and logout
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page).post(login))
        .route("/logout", get(logout))
}

/// Routes behind the session gate
pub fn landing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_redirect))
        .route("/index", get(index_page))
}

/// Landing page of each role.
pub fn landing_path(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "/indexadmin",
        UserRole::Usuario => "/index",
    }
}

pub async fn login_page(State(state): State<AppState>, Query(params): Query<LoginParams>) -> Response {
    let failed = params.error.as_deref() == Some("true");
    let view = View::new("login").with_error(failed.then(|| MSG_LOGIN_FAILED.to_string()));
    state.render(view)
}

/// Authenticate and open a session. Accounts without a recognized role are
/// turned away like a wrong password.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let jar = end_session(&state, jar).await;

    let user = match state.services.users().authenticate(&form.username, &form.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(username = %form.username, "Login failed");
            return (jar, Redirect::to(LOGIN_FAILED_PATH)).into_response();
        }
        Err(err) => {
            error!(error = ?err, "Authentication failed");
            return (jar, Redirect::to(LOGIN_FAILED_PATH)).into_response();
        }
    };

    let Some(role) = user.role() else {
        warn!(username = %user.username, role = %user.role, "Login refused, unrecognized role");
        return (jar, Redirect::to(LOGIN_FAILED_PATH)).into_response();
    };

    match state.sessions.create(SessionUser::from(&user)).await {
        Ok(id) => {
            info!(user_id = user.id, role = %role, "User logged in");
            let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(state.config.cookie_secure);
            (jar.add(cookie), Redirect::to(landing_path(role))).into_response()
        }
        Err(err) => {
            error!(error = ?err, "Failed to open session");
            (jar, Redirect::to(LOGIN_FAILED_PATH)).into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = end_session(&state, jar).await;
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}

/// Destroy the request's session, if any, and drop its cookie.
async fn end_session(state: &AppState, jar: CookieJar) -> CookieJar {
    let Some(id) = session_id(&jar) else {
        return jar;
    };

    if let Err(err) = state.sessions.destroy(&id).await {
        error!(error = ?err, "Failed to destroy session");
    }
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

pub async fn landing_redirect(Extension(current_user): Extension<CurrentUser>) -> AppResult<Redirect> {
    let role = current_user.role.ok_or(AppError::Forbidden)?;
    Ok(Redirect::to(landing_path(role)))
}

/// Standard landing page, open to both roles.
pub async fn index_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Response> {
    current_user.role.ok_or(AppError::Forbidden)?;
    Ok(state.render(View::new("index").with("current_user", &current_user)))
}

/// Admin landing page. Mounted behind the admin gate.
pub async fn index_admin_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Response {
    state.render(View::new("indexadmin").with("current_user", &current_user))
}
