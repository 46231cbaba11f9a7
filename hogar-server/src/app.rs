use std::sync::Arc;

use axum::Router;
use hogar_api::models::DeviceKind;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::{UserState, device_router, user_router};
use crate::repositories::UserRepository;
use crate::services::AuthService;

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );

    let auth_service = Arc::new(AuthService::new());
    let user_repository = Arc::new(UserRepository::new(storage.clone()));

    Router::new()
        .nest("/api/luces", device_router(DeviceKind::Light, storage.clone()))
        .nest("/api/puertas", device_router(DeviceKind::Door, storage.clone()))
        .nest(
            "/api/usuario",
            user_router(UserState {
                auth_service,
                user_repository,
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
