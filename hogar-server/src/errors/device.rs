use axum::http::StatusCode;
use hogar_api::models::DeviceKind;

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("{} no encontrada", .0.noun())]
    NotFound(DeviceKind),

    #[error("Parámetros de petición inválidos")]
    InvalidRequest,
}

impl DeviceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeviceError::NotFound(_) => StatusCode::NOT_FOUND,
            DeviceError::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}
