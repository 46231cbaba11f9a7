use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;
use common::mock_app::MockApp;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_users() {
    let app = MockApp::new().await.with_user_routes();
    app.seed_user("ana@test.com", "password123").await;

    let request = Request::builder()
        .uri("/api/usuario")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["email"], json!("ana@test.com"));
    assert!(body[0].get("pw").is_none());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = MockApp::new().await.with_user_routes();
    let user = app.seed_user("ana@test.com", "password123").await;

    let request = Request::builder()
        .uri(format!("/api/usuario/{}", user.id))
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/api/usuario/99")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = MockApp::new().await.with_user_routes();
    let user = app.seed_user("ana@test.com", "password123").await;

    let delete_request = || {
        Request::builder()
            .uri("/api/usuario/eliminar")
            .method(Method::DELETE)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"id": user.id}).to_string()))
            .unwrap()
    };

    let response = app.router.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Usuario eliminado"));

    let response = app.router.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
