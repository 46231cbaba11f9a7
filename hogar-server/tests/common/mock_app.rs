use std::sync::Arc;

use axum::Router;
use hogar_api::models::DeviceKind;
use hogar_server::configs::schema::SchemaManager;
use hogar_server::configs::settings::Database;
use hogar_server::configs::storage::Storage;
use hogar_server::handles::{UserState, device_router, user_router};
use hogar_server::models::{Device, User};
use hogar_server::repositories::UserRepository;
use hogar_server::services::AuthService;

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub auth_service: Arc<AuthService>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        Self {
            storage,
            auth_service: Arc::new(AuthService::new()),
            router: Router::new(),
        }
    }

    pub fn with_device_routes(mut self, kind: DeviceKind) -> Self {
        self.router = self.router.nest(
            &format!("/api/{}", kind.table()),
            device_router(kind, self.storage.clone()),
        );
        self
    }

    pub fn with_user_routes(mut self) -> Self {
        self.router = self.router.nest(
            "/api/usuario",
            user_router(UserState {
                auth_service: self.auth_service.clone(),
                user_repository: Arc::new(UserRepository::new(self.storage.clone())),
            }),
        );
        self
    }

    pub async fn seed_device(&self, kind: DeviceKind, nombre: &str, estado: bool) -> Device {
        sqlx::query_as::<_, Device>(&format!(
            "INSERT INTO {} (nombre, cantidad, estado) VALUES ($1, NULL, $2) RETURNING *;",
            kind.table()
        ))
        .bind(nombre)
        .bind(estado)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn seed_user(&self, email: &str, password: &str) -> User {
        let hash = self.auth_service.hash(password).unwrap();

        sqlx::query_as::<_, User>(
            "INSERT INTO usuario (nombre, email, pw, status) VALUES ('Test', $1, $2, 1) RETURNING *;",
        )
        .bind(email)
        .bind(&hash)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }
}
