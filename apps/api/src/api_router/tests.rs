use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::Utc;
use rolekeeper_core::Actor;
use rolekeeper_domain::RoleStore;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api_services::app_state_from_store;
use crate::middleware::ACTOR_HEADER;

use super::build_router;

fn app() -> Router {
    let actor = Actor::new("admin").unwrap_or_else(|_| unreachable!());
    let state = app_state_from_store(RoleStore::seeded(Utc::now()), actor);
    build_router(state, "http://localhost:3000").unwrap_or_else(|_| unreachable!())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|_| unreachable!())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| unreachable!())
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    serde_json::from_slice(&bytes).unwrap_or_default()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/health")).await;
    assert!(response.is_ok());
    let response = response.unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn seeded_role_is_listed_with_details() {
    let response = app()
        .oneshot(get("/api/roles"))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body[0]["role_id"], 1);
    assert_eq!(body[0]["role_name"], "Admin");
    assert_eq!(body[0]["objects"][0]["object_type"], "UID");
    assert_eq!(body[0]["objects"][0]["object_value"], "alinurdinf");
    assert_eq!(body[0]["accesses"][0]["rbac"]["app_id"], "MF");
    assert_eq!(body[0]["accesses"][0]["access"][0]["access"], "create");
}

#[tokio::test]
async fn search_without_match_returns_empty_list() {
    let response = app()
        .oneshot(get("/api/roles?search=payroll"))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn create_role_uses_actor_header() {
    let app = app();
    let mut request = post_json(
        "/api/roles",
        json!({
            "mode": "new",
            "role_name": "Viewer",
            "objects": [{ "object_type": "TEAM", "object_value": "blue" }],
            "accesses": [{ "app_id": "HRIS", "program_code": "ALL", "permissions": ["read"] }]
        }),
    );
    request
        .headers_mut()
        .insert(ACTOR_HEADER, "alice".parse().unwrap_or_else(|_| unreachable!()));

    let response = app
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["role_id"], 2);
    assert_eq!(body["created_by"], "alice");
    assert_eq!(body["description"], "");
    assert_eq!(body["objects"][0]["object_id"], 2);
    assert_eq!(body["accesses"][0]["rbac"]["rbac_id"], 2);
    assert_eq!(body["accesses"][0]["access"][0]["access_id"], 2);

    let listed = app
        .oneshot(get("/api/objects"))
        .await
        .unwrap_or_else(|_| unreachable!());
    let rows = read_json(listed).await;
    assert_eq!(rows[1]["role_name"], "Viewer");
}

#[tokio::test]
async fn create_role_without_actor_header_uses_default_actor() {
    let response = app()
        .oneshot(post_json(
            "/api/roles",
            json!({ "mode": "new", "role_name": "Viewer" }),
        ))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await["created_by"], "admin");
}

#[tokio::test]
async fn empty_role_name_is_bad_request() {
    let response = app()
        .oneshot(post_json("/api/roles", json!({ "mode": "new", "role_name": "" })))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["message"].is_string());
}

#[tokio::test]
async fn existing_mode_copies_role() {
    let response = app()
        .oneshot(post_json("/api/roles", json!({ "mode": "existing", "role_id": 1 })))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["role_name"], "Admin (Copy)");
    assert_eq!(body["created_by"], "system");
}

#[tokio::test]
async fn clone_of_unknown_role_is_not_found() {
    let response = app()
        .oneshot(post_json("/api/roles/42/clone", json!({})))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn draft_is_prefilled_from_role() {
    let response = app()
        .oneshot(get("/api/roles/1/draft"))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["role_name"], "Admin (Copy)");
    assert_eq!(body["accesses"][0]["permissions"], json!(["create"]));
}

#[tokio::test]
async fn access_listing_and_catalog_are_served() {
    let app = app();

    let access = app
        .clone()
        .oneshot(get("/api/access"))
        .await
        .unwrap_or_else(|_| unreachable!());
    let access = read_json(access).await;
    assert_eq!(access[0]["role_name"], "Admin");
    assert_eq!(access[0]["rbac"]["program_code"], "ALL");

    let catalog = app
        .oneshot(get("/api/catalog"))
        .await
        .unwrap_or_else(|_| unreachable!());
    let catalog = read_json(catalog).await;
    assert_eq!(
        catalog["applications"],
        json!(["MF", "HRIS", "SNAP", "FINANCE"])
    );
    assert_eq!(catalog["object_types"][0], "UID");
}
