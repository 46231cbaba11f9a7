use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use hogar_api::restful::{
    DeleteRequest, LoginRequest, MutationResponse, MutationResult, RegisterRequest, UserResponse,
};

use crate::errors::{ApiError, AuthError};
use crate::models::User;
use crate::repositories::UserRepository;
use crate::services::AuthService;

#[derive(Clone)]
pub struct UserState {
    pub auth_service: Arc<AuthService>,
    pub user_repository: Arc<UserRepository>,
}

pub fn user_router(state: UserState) -> Router {
    Router::new()
        .route("/", get(get_users))
        .route("/agregar", post(register_user))
        .route("/eliminar", delete(delete_user))
        .route("/login", post(login_user))
        .route("/:user_id", get(get_user_by_id))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = "usuario",
    responses(
        (status = 200, description = "All registered accounts", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(State(state): State<UserState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .user_repository
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/usuario/{user_id}",
    tag = "usuario",
    params(
        ("user_id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account data", body = UserResponse),
        (status = 404, description = "Account does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user_by_id(
    State(state): State<UserState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_repository
        .find_by_id(user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/api/usuario/agregar",
    tag = "usuario",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created, one row affected", body = MutationResponse),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_user(
    State(state): State<UserState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    if body.nombre.trim().is_empty() || body.email.trim().is_empty() || body.pw.trim().is_empty() {
        return Err(AuthError::InvalidRequest.into());
    }

    if state
        .user_repository
        .find_by_email(&body.email)
        .await?
        .is_some()
    {
        return Err(AuthError::EmailExists.into());
    }

    let hash = state
        .auth_service
        .hash(&body.pw)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    let user = User {
        id: 0,
        nombre: body.nombre,
        email: body.email,
        pw: hash,
        status: body.status,
    };

    let changed = state.user_repository.create(&user).await?;

    Ok(Json(MutationResponse {
        message: "Usuario agregado".to_string(),
        result: MutationResult {
            affected_rows: changed.affected,
            insert_id: Some(changed.last_insert_id),
        },
    }))
}

#[utoipa::path(
    delete,
    path = "/api/usuario/eliminar",
    tag = "usuario",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Account deleted", body = MutationResponse),
        (status = 404, description = "Account does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user(
    State(state): State<UserState>,
    Json(body): Json<DeleteRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let changed = state.user_repository.delete(body.id).await?;

    if changed.affected == 0 {
        return Err(AuthError::UserNotFound.into());
    }

    Ok(Json(MutationResponse {
        message: "Usuario eliminado".to_string(),
        result: MutationResult {
            affected_rows: changed.affected,
            insert_id: None,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/usuario/login",
    tag = "usuario",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, returns account data", body = UserResponse),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Unknown email"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_user(
    State(state): State<UserState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_repository
        .find_by_email(&body.email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let valid = state
        .auth_service
        .verify(&user.pw, &body.password)
        .map_err(|e| anyhow!("Failed to verify password: {}", e))?;

    if !valid {
        return Err(AuthError::InvalidPassword.into());
    }

    Ok(Json(user.into()))
}
