//! Web surface tests over in-memory services.
//!
//! The router is driven with `oneshot` requests; no database or Redis is
//! needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use domain::{ActivityType, ForestType, PasswordDigest, TreeSpecies, User, Zone};
use forest_service_lib::repository::{MemoryCatalog, MemoryUsers};
use forest_service_lib::service::{Repositories, Services};
use web_lib::config::WebConfig;
use web_lib::middleware::MemorySessionStore;
use web_lib::routes::create_router;
use web_lib::state::AppState;
use web_lib::views::EmbeddedJsonRenderer;

// =============================================================================
// Test Helpers
// =============================================================================

struct TestApp {
    router: Router,
    services: Services,
}

fn account(id: i32, username: &str, role: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: PasswordDigest::from_plain("secreto").into_string(),
        role: role.to_string(),
        ..User::default()
    }
}

fn app() -> TestApp {
    let mut repos = Repositories::in_memory();
    repos.users = Arc::new(MemoryUsers::seeded(vec![
        account(1, "admin", "admin"),
        account(2, "lucia", "usuario"),
        account(3, "auditor", "auditor"),
    ]));
    repos.zones = Arc::new(
        MemoryCatalog::seeded(vec![Zone {
            id: 1,
            ..Zone::new("Bosque Norte", ForestType::Dry, 10.0)
        }])
        .ordered_by_name(),
    );
    repos.activity_types = Arc::new(MemoryCatalog::seeded(vec![ActivityType {
        id: 1,
        name: "Reforestación".into(),
        description: "Plantación de especies nativas".into(),
        active: true,
    }]));

    let services = Services::new(repos);
    let state = AppState::new(
        services.clone(),
        Arc::new(MemorySessionStore::new()),
        Arc::new(EmbeddedJsonRenderer),
        WebConfig::default(),
    );

    TestApp {
        router: create_router(state),
        services,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, cookie: Option<&str>, body: &str) -> Response {
        self.post(uri, cookie, "application/x-www-form-urlencoded", body).await
    }

    async fn post(&self, uri: &str, cookie: Option<&str>, content_type: &str, body: &str) -> Response {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap()).await
    }

    /// Log in and return the `Cookie` header value of the new session.
    async fn login(&self, username: &str) -> String {
        let response = self
            .post_form("/login", None, &format!("username={}&password=secreto", username))
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie(&response).expect("session cookie")
    }
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("FORESTSESSIONID=") && !value.starts_with("FORESTSESSIONID=;"))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Login and Session Tests
// =============================================================================

#[tokio::test]
async fn protected_pages_redirect_to_login_without_session() {
    let app = app();

    for uri in ["/zones", "/treespecies?option=new", "/reportes", "/indexadmin", "/"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/login");
    }

    let response = app.get("/zones", Some("FORESTSESSIONID=not-a-session")).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn login_redirects_by_role() {
    let app = app();

    let response = app.post_form("/login", None, "username=admin&password=secreto").await;
    assert_eq!(location(&response), "/indexadmin");
    assert!(session_cookie(&response).is_some());

    let response = app.post_form("/login", None, "username=lucia&password=secreto").await;
    assert_eq!(location(&response), "/index");
}

#[tokio::test]
async fn failed_login_opens_no_session() {
    let app = app();

    for body in [
        "username=admin&password=wrong",
        "username=nobody&password=secreto",
        "username=auditor&password=secreto",
    ] {
        let response = app.post_form("/login", None, body).await;
        assert_eq!(location(&response), "/login?error=true", "{}", body);
        assert!(session_cookie(&response).is_none());
    }

    let page = body_text(app.get("/login?error=true", None).await).await;
    assert!(page.contains("Invalid username or password."));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = app();
    let cookie = app.login("lucia").await;

    assert_eq!(app.get("/zones", Some(&cookie)).await.status(), StatusCode::OK);

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(location(&response), "/login");

    let response = app.get("/zones", Some(&cookie)).await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn root_sends_each_role_to_its_landing_page() {
    let app = app();

    let admin = app.login("admin").await;
    assert_eq!(location(&app.get("/", Some(&admin)).await), "/indexadmin");

    let user = app.login("lucia").await;
    assert_eq!(location(&app.get("/", Some(&user)).await), "/index");
    assert_eq!(app.get("/index", Some(&user)).await.status(), StatusCode::OK);
}

// =============================================================================
// Authorization Tests
// =============================================================================

#[tokio::test]
async fn non_admin_cannot_mutate() {
    let app = app();
    let cookie = app.login("lucia").await;

    for uri in [
        "/zones?option=new",
        "/zones?option=update&id=1",
        "/zones?option=delete&id=1",
        "/treespecies?option=new",
        "/tipoactividad?option=delete&id=1",
    ] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", uri);
    }

    let response = app
        .post_form("/zones", Some(&cookie), "nombre=Bosque+Sur&tipoBosque=Seco&areaHa=4")
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let zones = app.services.zones().list_all().await.unwrap();
    assert_eq!(zones.len(), 1);
    assert!(zones[0].active);
}

#[tokio::test]
async fn role_is_checked_before_the_body_is_read() {
    let app = app();
    let cookie = app.login("lucia").await;

    let response = app
        .post("/zones", Some(&cookie), "application/json", r#"{"nombre":"Bosque Sur"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .post("/usuarios", Some(&cookie), "application/json", r#"{"username":"x"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_pages_reject_other_roles() {
    let app = app();
    let cookie = app.login("lucia").await;

    assert_eq!(app.get("/indexadmin", Some(&cookie)).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.get("/usuarios", Some(&cookie)).await.status(), StatusCode::FORBIDDEN);

    let admin = app.login("admin").await;
    assert_eq!(app.get("/indexadmin", Some(&admin)).await.status(), StatusCode::OK);
    assert_eq!(app.get("/usuarios", Some(&admin)).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn anyone_with_a_session_can_list() {
    let app = app();
    let cookie = app.login("lucia").await;

    let response = app.get("/zones?option=purge", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("data-view=\"zones\""));
    assert!(page.contains("Bosque Norte"));
}

// =============================================================================
// CRUD Tests
// =============================================================================

#[tokio::test]
async fn admin_creates_zone_from_form() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form("/zones", Some(&cookie), "id=0&nombre=Bosque+Sur&tipoBosque=manglar&areaHa=3%2C5")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/zones");

    let zones = app.services.zones().list_all().await.unwrap();
    let created = zones.iter().find(|z| z.name == "Bosque Sur").unwrap();
    assert_eq!(created.forest_type, Some(ForestType::Mangrove));
    assert_eq!(created.area_ha, Some(3.5));
}

#[tokio::test]
async fn zone_without_forest_type_is_saved_as_other() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app.post_form("/zones", Some(&cookie), "nombre=Bosque+Sur&areaHa=3").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let zones = app.services.zones().list_all().await.unwrap();
    let created = zones.iter().find(|z| z.name == "Bosque Sur").unwrap();
    assert_eq!(created.forest_type, Some(ForestType::Other));
}

#[tokio::test]
async fn unparsable_area_re_renders_what_was_typed() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form("/zones", Some(&cookie), "nombre=Bosque+Entrado&tipoBosque=Seco&areaHa=mucho")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("data-view=\"zones_form\""));
    assert!(page.contains("Invalid area value."));
    assert!(page.contains("Bosque Entrado"));
    assert_eq!(app.services.zones().list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unreadable_body_is_shown_on_the_form() {
    let app = app();
    let cookie = app.login("admin").await;

    for (uri, view) in [("/zones", "zones_form"), ("/usuarios", "usuarios_form")] {
        let response = app.post(uri, Some(&cookie), "application/json", "{}").await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);

        let page = body_text(response).await;
        assert!(page.contains(&format!("data-view=\"{}\"", view)));
        assert!(page.contains("The submitted form could not be read."));
        assert!(!page.contains("Content-Type"));
    }
}

#[tokio::test]
async fn zone_validation_failure_re_renders_form() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form("/zones", Some(&cookie), "nombre=Bosque+Sur&tipoBosque=Seco&areaHa=0")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("data-view=\"zones_form\""));
    assert!(page.contains("The area must be greater than zero."));
    assert!(page.contains("Bosque Sur"));
    assert_eq!(app.services.zones().list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_responsable_keeps_store_unchanged() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form(
            "/conservationactivities",
            Some(&cookie),
            "nombreActividad=Siembra&fechaActividad=2024-05-01&responsable=&tipoActividadId=1&zonaId=1&activo=on",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("data-view=\"conservation_activities_form\""));
    assert!(page.contains("The responsable of the activity is required."));
    assert!(page.contains("Reforestación"));
    assert!(app.services.activities().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_reports_bad_and_unknown_ids_on_the_list() {
    let app = app();
    let cookie = app.login("admin").await;

    let page = body_text(app.get("/zones?option=update&id=abc", Some(&cookie)).await).await;
    assert!(page.contains("data-view=\"zones\""));
    assert!(page.contains("Invalid id: abc"));

    let page = body_text(app.get("/zones?option=update&id=99", Some(&cookie)).await).await;
    assert!(page.contains("Zone not found with id 99"));

    let page = body_text(app.get("/zones?option=update&id=1", Some(&cookie)).await).await;
    assert!(page.contains("data-view=\"zones_form\""));
    assert!(page.contains("Bosque Norte"));
}

#[tokio::test]
async fn delete_is_logical() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form("/treespecies", Some(&cookie), "nombreComun=Ceibo&zonaId=1&activo=on")
        .await;
    assert_eq!(location(&response), "/treespecies");

    let response = app.get("/treespecies?option=delete&id=1", Some(&cookie)).await;
    assert_eq!(location(&response), "/treespecies");

    let species = app.services.species();
    assert!(species.list_all().await.unwrap().is_empty());
    let kept: TreeSpecies = species.get_by_id(1).await.unwrap().unwrap();
    assert!(!kept.active);
}

#[tokio::test]
async fn duplicate_species_name_is_reported_on_the_form() {
    let app = app();
    let cookie = app.login("admin").await;

    app.post_form("/treespecies", Some(&cookie), "nombreComun=Ceibo&activo=on").await;
    let response = app
        .post_form("/treespecies", Some(&cookie), "nombreComun=CEIBO&activo=on")
        .await;

    let page = body_text(response).await;
    assert!(page.contains("An active species with that common name already exists."));
    assert_eq!(app.services.species().list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn admin_registers_account_that_can_log_in() {
    let app = app();
    let cookie = app.login("admin").await;

    let response = app
        .post_form(
            "/usuarios",
            Some(&cookie),
            "username=marta&password=secreto&rol=usuario&nombreCompleto=Marta+Ruiz&activo=on",
        )
        .await;
    assert_eq!(location(&response), "/usuarios");

    let response = app.post_form("/login", None, "username=marta&password=secreto").await;
    assert_eq!(location(&response), "/index");
}

#[tokio::test]
async fn reports_page_lists_everything() {
    let app = app();
    let cookie = app.login("lucia").await;

    let page = body_text(app.get("/reportes", Some(&cookie)).await).await;
    assert!(page.contains("data-view=\"reportes\""));
    assert!(page.contains("Bosque Norte"));
    assert!(page.contains("\"statistics\""));
}

#[tokio::test]
async fn health_is_public() {
    let app = app();

    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "not_configured");
}
