//! Role-gated CRUD pages shared by every catalog.
//!
//! A page is driven by the `option` query parameter: `list` (the default,
//! also used for unknown values), `new`, `update` and `delete`. Everyone with
//! a session may list; every other option, and every form submission,
//! requires the admin role and is otherwise refused with 403.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{CatalogRecord, ForestType};
use forest_service_lib::service::{CatalogService, Services};

use crate::extractors::{parse_id, FormFields};
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;
use crate::views::{model_value, View};

/// Requested page option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOption {
    List,
    New,
    Update,
    Delete,
}

impl CrudOption {
    /// Unknown or missing options fall back to `List`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => CrudOption::New,
            Some("update") => CrudOption::Update,
            Some("delete") => CrudOption::Delete,
            _ => CrudOption::List,
        }
    }

    pub fn is_mutation(self) -> bool {
        !matches!(self, CrudOption::List)
    }
}

/// Query parameters of a CRUD page.
#[derive(Debug, Default, Deserialize)]
pub struct CrudParams {
    pub option: Option<String>,
    pub id: Option<String>,
}

/// Reference lists a page shows next to its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Zones,
    ConservationStates,
    ActivityTypes,
    ForestTypes,
}

/// One catalog exposed as a CRUD page.
pub trait CatalogPage: Send + Sync + 'static {
    type Record: CatalogRecord + Serialize + Default;

    /// Route of the page, also the target of the post-mutation redirect
    const PATH: &'static str;
    const LIST_VIEW: &'static str;
    const FORM_VIEW: &'static str;
    const REFERENCES: &'static [Reference] = &[];

    fn service(services: &Services) -> Arc<dyn CatalogService<Self::Record>>;

    /// Build a record from a submitted form, along with the first field that
    /// failed to parse. The record keeps every field that did parse.
    fn from_form(form: &FormFields) -> (Self::Record, Option<AppError>);
}

/// Routes of a catalog page.
pub fn catalog_routes<P: CatalogPage>() -> Router<AppState> {
    Router::new().route(P::PATH, get(catalog_get::<P>).post(catalog_post::<P>))
}

/// `GET` side of a catalog page.
pub async fn catalog_get<P: CatalogPage>(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<CrudParams>,
) -> Response {
    let option = CrudOption::parse(params.option.as_deref());
    if option.is_mutation() {
        if let Err(err) = require_admin(&current_user) {
            warn!(user = %current_user.username, page = P::PATH, ?option, "Mutation denied");
            return err.into_response();
        }
    }

    let result = match option {
        CrudOption::List => Ok(list_page::<P>(&state, &current_user, None).await),
        CrudOption::New => {
            Ok(form_page::<P>(&state, &current_user, &P::Record::default(), None).await)
        }
        CrudOption::Update => edit_page::<P>(&state, &current_user, params.id.as_deref()).await,
        CrudOption::Delete => delete_record::<P>(&state, params.id.as_deref()).await,
    };

    match result {
        Ok(response) => response,
        Err(err) => list_page::<P>(&state, &current_user, Some(err.user_message())).await,
    }
}

/// `POST` side of a catalog page: create when the id is empty or `0`,
/// otherwise replace by id.
///
/// The role is checked before any problem with the body is reported.
pub async fn catalog_post<P: CatalogPage>(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    form: Result<FormFields, AppError>,
) -> Response {
    if let Err(err) = require_admin(&current_user) {
        warn!(user = %current_user.username, page = P::PATH, "Form submission denied");
        return err.into_response();
    }

    let (record, unreadable) = match form {
        Ok(form) => P::from_form(&form),
        Err(err) => (P::Record::default(), Some(err)),
    };
    if let Some(err) = unreadable {
        warn!(entity = P::Record::LABEL, error = %err, "Unreadable form");
        return form_page::<P>(&state, &current_user, &record, Some(err.user_message())).await;
    }

    match P::service(&state.services).save(record.clone()).await {
        Ok(saved) => {
            info!(
                entity = P::Record::LABEL,
                id = saved.id(),
                user = %current_user.username,
                "Record saved"
            );
            Redirect::to(P::PATH).into_response()
        }
        Err(err) => form_page::<P>(&state, &current_user, &record, Some(err.user_message())).await,
    }
}

async fn edit_page<P: CatalogPage>(
    state: &AppState,
    current_user: &CurrentUser,
    raw_id: Option<&str>,
) -> AppResult<Response> {
    let id = parse_id(raw_id)?;

    match P::service(&state.services).get_by_id(id).await? {
        Some(record) => Ok(form_page::<P>(state, current_user, &record, None).await),
        None => {
            let message = format!("{} not found with id {}", P::Record::LABEL, id);
            Ok(list_page::<P>(state, current_user, Some(message)).await)
        }
    }
}

async fn delete_record<P: CatalogPage>(state: &AppState, raw_id: Option<&str>) -> AppResult<Response> {
    let id = parse_id(raw_id)?;

    if P::service(&state.services).delete(id).await? {
        info!(entity = P::Record::LABEL, id, "Record deactivated");
    } else {
        warn!(entity = P::Record::LABEL, id, "Nothing to delete");
    }
    Ok(Redirect::to(P::PATH).into_response())
}

/// Render the list view, keeping `error` ahead of any failure while loading.
async fn list_page<P: CatalogPage>(
    state: &AppState,
    current_user: &CurrentUser,
    error: Option<String>,
) -> Response {
    let view = View::new(P::LIST_VIEW).with("current_user", current_user);

    let view = match load_list::<P>(&state.services).await {
        Ok((records, references)) => view
            .with("records", &records)
            .merge(references)
            .with_error(error),
        Err(err) => {
            error!(entity = P::Record::LABEL, error = ?err, "Failed to load list");
            view.with("records", &Vec::<P::Record>::new())
                .with_error(error.or_else(|| Some(err.user_message())))
        }
    };
    state.render(view)
}

async fn load_list<P: CatalogPage>(
    services: &Services,
) -> AppResult<(Vec<P::Record>, Map<String, Value>)> {
    let records = P::service(services).list_all().await?;
    let references = load_references(services, P::REFERENCES).await?;
    Ok((records, references))
}

async fn form_page<P: CatalogPage>(
    state: &AppState,
    current_user: &CurrentUser,
    record: &P::Record,
    error: Option<String>,
) -> Response {
    let references = match load_references(&state.services, P::REFERENCES).await {
        Ok(references) => references,
        Err(err) => {
            error!(entity = P::Record::LABEL, error = ?err, "Failed to load reference lists");
            Map::new()
        }
    };

    let view = View::new(P::FORM_VIEW)
        .with("current_user", current_user)
        .with("record", record)
        .merge(references)
        .with_error(error);
    state.render(view)
}

/// Fetch the requested reference lists, keyed by their view attribute name.
pub async fn load_references(
    services: &Services,
    wanted: &[Reference],
) -> AppResult<Map<String, Value>> {
    let mut attributes = Map::new();

    for reference in wanted {
        let (key, value) = match reference {
            Reference::Zones => ("zones", model_value(&services.zones().list_all().await?)),
            Reference::ConservationStates => {
                ("states", model_value(&services.states().list_all().await?))
            }
            Reference::ActivityTypes => (
                "activity_types",
                model_value(&services.activity_types().list_all().await?),
            ),
            Reference::ForestTypes => {
                let names: Vec<&str> = ForestType::ALL.iter().map(|kind| kind.display_name()).collect();
                ("forest_types", model_value(&names))
            }
        };
        attributes.insert(key.to_string(), value);
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_options_fall_back_to_list() {
        assert_eq!(CrudOption::parse(None), CrudOption::List);
        assert_eq!(CrudOption::parse(Some("list")), CrudOption::List);
        assert_eq!(CrudOption::parse(Some("purge")), CrudOption::List);
        assert_eq!(CrudOption::parse(Some("NEW")), CrudOption::List);
        assert_eq!(CrudOption::parse(Some("delete")), CrudOption::Delete);
    }

    #[test]
    fn only_list_is_read_only() {
        assert!(!CrudOption::List.is_mutation());
        for option in [CrudOption::New, CrudOption::Update, CrudOption::Delete] {
            assert!(option.is_mutation());
        }
    }

    #[tokio::test]
    async fn forest_types_need_no_store() {
        let services = Services::new(forest_service_lib::service::Repositories::in_memory());
        let attributes = load_references(&services, &[Reference::ForestTypes]).await.unwrap();

        let names = attributes["forest_types"].as_array().unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(names[1], "Húmedo Tropical");
    }
}
