//! Integration tests over the real router.
//!
//! These drive the assembled router with `tower::ServiceExt::oneshot` and
//! stick to request paths that are decided before any store operation runs
//! (validation failures and routing), so no live document store is needed.
//! The driver connects lazily, which makes a placeholder URI safe here.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use batepapo::routes::router::create_router;
use batepapo::server::config::Config;
use batepapo::server::state::AppState;
use batepapo::store::Store;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

async fn test_app() -> Router {
    let config = Config {
        db_uri: "mongodb://127.0.0.1:27017".to_string(),
        db_name: "batepapo-test".to_string(),
        user_collection: "participants".to_string(),
        message_collection: "messages".to_string(),
    };
    let store = Store::connect(&config).await.expect("store handle");
    create_router(AppState { store })
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_list(response: axum::response::Response) -> Vec<String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn register_with_empty_body_lists_the_missing_name() {
    let response = test_app()
        .await
        .oneshot(json_post("/participants", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_list(response).await,
        vec!["\"name\" is required".to_string()]
    );
}

#[tokio::test]
async fn register_with_empty_name_is_rejected() {
    let response = test_app()
        .await
        .oneshot(json_post("/participants", r#"{"name":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_list(response).await,
        vec!["\"name\" is not allowed to be empty".to_string()]
    );
}

#[tokio::test]
async fn register_with_numeric_name_is_rejected() {
    let response = test_app()
        .await
        .oneshot(json_post("/participants", r#"{"name":42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_list(response).await,
        vec!["\"name\" must be a string".to_string()]
    );
}

#[tokio::test]
async fn empty_message_body_reports_every_field_together() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .header("user", "Ana")
        .body(Body::from("{}"))
        .unwrap();

    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_list(response).await,
        vec![
            "\"to\" is required".to_string(),
            "\"text\" is required".to_string(),
            "\"type\" is required".to_string(),
        ]
    );
}

#[tokio::test]
async fn message_with_unknown_type_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .header("user", "Ana")
        .body(Body::from(r#"{"to":"Todos","text":"hi","type":"shout"}"#))
        .unwrap();

    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_list(response).await,
        vec!["\"type\" must be one of [message, private_message]".to_string()]
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/rooms")
        .body(Body::empty())
        .unwrap();

    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
