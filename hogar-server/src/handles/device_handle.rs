use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use hogar_api::models::{Device, DeviceKind};
use hogar_api::restful::{
    AddDeviceRequest, DeleteRequest, MutationResponse, MutationResult, UpdateStatusRequest,
};

use crate::configs::Storage;
use crate::errors::{ApiError, DeviceError};
use crate::models;
use crate::repositories::DeviceRepository;

#[derive(Clone)]
pub struct DeviceState {
    pub repository: Arc<DeviceRepository>,
}

/// One router serves both device resources; mount it under `/api/luces` and
/// `/api/puertas` with the matching kind.
pub fn device_router(kind: DeviceKind, storage: Arc<Storage>) -> Router {
    let state = DeviceState {
        repository: Arc::new(DeviceRepository::new(storage, kind)),
    };

    Router::new()
        .route("/", get(get_devices))
        .route("/agregar", post(add_device))
        .route("/eliminar", delete(delete_device))
        .route("/:device_id", get(get_device_by_id).put(update_device_status))
        .with_state(state)
}

pub async fn get_devices(
    State(state): State<DeviceState>,
) -> Result<Json<Vec<Device>>, ApiError> {
    let devices = state
        .repository
        .find_all()
        .await?
        .into_iter()
        .map(Device::from)
        .collect();

    Ok(Json(devices))
}

pub async fn get_device_by_id(
    State(state): State<DeviceState>,
    Path(device_id): Path<i64>,
) -> Result<Json<Device>, ApiError> {
    let device = state
        .repository
        .find_by_id(device_id)
        .await?
        .ok_or(DeviceError::NotFound(state.repository.kind()))?;

    Ok(Json(device.into()))
}

pub async fn add_device(
    State(state): State<DeviceState>,
    Json(body): Json<AddDeviceRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    if body.nombre.trim().is_empty() {
        return Err(DeviceError::InvalidRequest.into());
    }

    let device = models::Device {
        id: 0,
        nombre: body.nombre,
        cantidad: body.cantidad,
        estado: body.estado,
    };

    let changed = state.repository.create(&device).await?;

    Ok(Json(MutationResponse {
        message: format!("{} agregada", state.repository.kind().noun()),
        result: MutationResult {
            affected_rows: changed.affected,
            insert_id: Some(changed.last_insert_id),
        },
    }))
}

pub async fn delete_device(
    State(state): State<DeviceState>,
    Json(body): Json<DeleteRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let changed = state.repository.delete(body.id).await?;

    if changed.affected == 0 {
        return Err(DeviceError::NotFound(state.repository.kind()).into());
    }

    Ok(Json(MutationResponse {
        message: format!("{} eliminada", state.repository.kind().noun()),
        result: MutationResult {
            affected_rows: changed.affected,
            insert_id: None,
        },
    }))
}

/// Status updates are idempotent: repeating the same `estado` succeeds and
/// leaves the row as it was.
pub async fn update_device_status(
    State(state): State<DeviceState>,
    Path(device_id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let changed = state
        .repository
        .update_status(device_id, body.estado)
        .await?;

    if changed.affected == 0 {
        return Err(DeviceError::NotFound(state.repository.kind()).into());
    }

    Ok(Json(MutationResponse {
        message: "Estado actualizado".to_string(),
        result: MutationResult {
            affected_rows: changed.affected,
            insert_id: None,
        },
    }))
}
