use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDeviceRequest {
    /// Display name.
    pub nombre: String,
    /// Optional count attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<i64>,
    /// Initial state.
    #[serde(default)]
    pub estado: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New state to persist.
    pub estado: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}
