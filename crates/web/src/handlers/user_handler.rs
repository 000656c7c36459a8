//! User administration page (admin only).
//!
//! Same option-driven shape as the catalog pages, except that accounts are
//! deleted for good and the password is hashed on the way in.

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{User, VALID_ROLES};

use super::catalog_handler::{CrudOption, CrudParams};
use crate::extractors::{parse_id, FieldErrors, FormFields};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::views::View;

const USERS_PATH: &str = "/usuarios";

/// Create user routes. Mounted behind the admin gate.
pub fn user_routes() -> Router<AppState> {
    Router::new().route(USERS_PATH, get(users_get).post(users_post))
}

pub async fn users_get(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<CrudParams>,
) -> Response {
    let result = match CrudOption::parse(params.option.as_deref()) {
        CrudOption::List => Ok(list_page(&state, &current_user, None).await),
        CrudOption::New => Ok(form_page(&state, &current_user, &User::default(), None)),
        CrudOption::Update => edit_page(&state, &current_user, params.id.as_deref()).await,
        CrudOption::Delete => delete_user(&state, &current_user, params.id.as_deref()).await,
    };

    match result {
        Ok(response) => response,
        Err(err) => list_page(&state, &current_user, Some(err.user_message())).await,
    }
}

/// Create when the id is empty or `0`; a blank password on update keeps the
/// current one.
pub async fn users_post(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    form: Result<FormFields, AppError>,
) -> Response {
    let (user, password, unreadable) = match form {
        Ok(form) => user_from_form(&form),
        Err(err) => (User::default(), String::new(), Some(err)),
    };
    if let Some(err) = unreadable {
        warn!(error = %err, "Unreadable account form");
        return form_page(&state, &current_user, &user, Some(err.user_message()));
    }

    let users = state.services.users();
    let saved = if user.id == 0 {
        users.register(user.clone(), &password).await
    } else {
        users.update_user(user.clone(), Some(&password)).await
    };

    match saved {
        Ok(saved) => {
            info!(user_id = saved.id, by = %current_user.username, "Account saved");
            Redirect::to(USERS_PATH).into_response()
        }
        Err(err) => form_page(&state, &current_user, &user, Some(err.user_message())),
    }
}

/// The typed password is returned apart and never echoed back to the form.
fn user_from_form(form: &FormFields) -> (User, String, Option<AppError>) {
    let mut errors = FieldErrors::default();
    let user = User {
        id: errors.keep(form.record_id()),
        username: form.text("username").trim().to_string(),
        email: form.optional_text("email"),
        full_name: form.optional_text("nombreCompleto"),
        role: form.text("rol"),
        active: form.has("activo"),
        ..User::default()
    };
    (user, form.text("password"), errors.first())
}

async fn edit_page(
    state: &AppState,
    current_user: &CurrentUser,
    raw_id: Option<&str>,
) -> AppResult<Response> {
    let id = parse_id(raw_id)?;

    match state.services.users().get_user(id).await? {
        Some(user) => Ok(form_page(state, current_user, &user, None)),
        None => Ok(list_page(state, current_user, Some(not_found(id))).await),
    }
}

async fn delete_user(
    state: &AppState,
    current_user: &CurrentUser,
    raw_id: Option<&str>,
) -> AppResult<Response> {
    let id = parse_id(raw_id)?;

    match state.services.users().delete_user(id).await {
        Ok(()) => {
            info!(user_id = id, by = %current_user.username, "Account deleted");
            Ok(Redirect::to(USERS_PATH).into_response())
        }
        Err(AppError::NotFound) => {
            warn!(user_id = id, "Nothing to delete");
            Ok(list_page(state, current_user, Some(not_found(id))).await)
        }
        Err(err) => Err(err),
    }
}

fn not_found(id: i32) -> String {
    format!("User not found with id {}", id)
}

async fn list_page(state: &AppState, current_user: &CurrentUser, error: Option<String>) -> Response {
    let view = View::new("usuarios").with("current_user", current_user);

    let view = match state.services.users().list_users().await {
        Ok(users) => view.with("records", &users).with_error(error),
        Err(err) => {
            error!(error = ?err, "Failed to load users");
            view.with("records", &Vec::<User>::new())
                .with_error(error.or_else(|| Some(err.user_message())))
        }
    };
    state.render(view)
}

fn form_page(
    state: &AppState,
    current_user: &CurrentUser,
    user: &User,
    error: Option<String>,
) -> Response {
    let view = View::new("usuarios_form")
        .with("current_user", current_user)
        .with("record", user)
        .with("roles", VALID_ROLES)
        .with_error(error);
    state.render(view)
}
