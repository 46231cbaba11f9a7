use serde::{Deserialize, Serialize};

/// Login credentials.
///
/// Login sends `password` while registration sends `pw`; the asymmetry is
/// part of the wire contract.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub nombre: String,
    pub email: String,
    /// Plain password; hashed by the server before it reaches storage.
    pub pw: String,
    /// Account status flag, 1 = active.
    #[serde(default = "default_status")]
    pub status: i64,
}

fn default_status() -> i64 {
    1
}

/// Account data returned by login and the user listing. The stored password
/// hash never leaves the server.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub status: i64,
}
