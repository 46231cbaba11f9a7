use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use hogar_api::models::DeviceKind;
use hogar_api::restful::{AddDeviceRequest, UpdateStatusRequest};
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
async fn test_get_devices() {
    let app = MockApp::new().await.with_device_routes(DeviceKind::Light);
    app.seed_device(DeviceKind::Light, "Sala", false).await;

    let request = Request::builder()
        .uri("/api/luces")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!([{"id": 1, "nombre": "Sala", "estado": false}]));
}

#[tokio::test]
async fn test_get_device_by_id() {
    let app = MockApp::new().await.with_device_routes(DeviceKind::Light);
    let device = app.seed_device(DeviceKind::Light, "Cocina", true).await;

    let request = Request::builder()
        .uri(format!("/api/luces/{}", device.id))
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["nombre"], json!("Cocina"));
    assert_eq!(body["estado"], json!(true));

    let request = Request::builder()
        .uri("/api/luces/99")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Luz no encontrada"));
}

#[tokio::test]
async fn test_add_device() {
    let app = MockApp::new().await.with_device_routes(DeviceKind::Light);

    let request = Request::builder()
        .uri("/api/luces/agregar")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&AddDeviceRequest {
                nombre: "Patio".to_string(),
                cantidad: Some(2),
                estado: false,
            })
            .unwrap(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Luz agregada"));
    assert_eq!(body["result"]["affectedRows"], json!(1));
    assert_eq!(body["result"]["insertId"], json!(1));

    // An empty name is a presence-check failure at the route layer.
    let request = Request::builder()
        .uri("/api/luces/agregar")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&AddDeviceRequest {
                nombre: "  ".to_string(),
                cantidad: None,
                estado: false,
            })
            .unwrap(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_device() {
    let app = MockApp::new().await.with_device_routes(DeviceKind::Door);
    let device = app.seed_device(DeviceKind::Door, "Entrada", false).await;

    let request = Request::builder()
        .uri("/api/puertas/eliminar")
        .method(Method::DELETE)
        .header("Content-Type", "application/json")
        .body(Body::from(json!({"id": device.id}).to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Puerta eliminada"));
    assert_eq!(body["result"]["affectedRows"], json!(1));

    // Deleting the same row again reports it missing.
    let request = Request::builder()
        .uri("/api/puertas/eliminar")
        .method(Method::DELETE)
        .header("Content-Type", "application/json")
        .body(Body::from(json!({"id": device.id}).to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_device_status() {
    let app = MockApp::new().await.with_device_routes(DeviceKind::Light);
    let device = app.seed_device(DeviceKind::Light, "Sala", false).await;

    let put_estado = |estado: bool| {
        Request::builder()
            .uri(format!("/api/luces/{}", device.id))
            .method(Method::PUT)
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_string(&UpdateStatusRequest { estado }).unwrap(),
            ))
            .unwrap()
    };

    let response = app.router.clone().oneshot(put_estado(true)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Estado actualizado"));
    assert_eq!(body["result"]["affectedRows"], json!(1));

    // Repeating the same estado is idempotent: the call succeeds and the
    // stored value is unchanged.
    let response = app.router.clone().oneshot(put_estado(true)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri(format!("/api/luces/{}", device.id))
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["estado"], json!(true));

    let request = Request::builder()
        .uri("/api/luces/42")
        .method(Method::PUT)
        .header("Content-Type", "application/json")
        .body(Body::from(json!({"estado": false}).to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_doors_and_lights_share_the_router() {
    let app = MockApp::new()
        .await
        .with_device_routes(DeviceKind::Light)
        .with_device_routes(DeviceKind::Door);
    app.seed_device(DeviceKind::Door, "Garaje", true).await;

    let request = Request::builder()
        .uri("/api/puertas")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["nombre"], json!("Garaje"));

    // The lights table is untouched by door traffic.
    let request = Request::builder()
        .uri("/api/luces")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}
