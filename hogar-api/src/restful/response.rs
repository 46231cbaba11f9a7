use serde::{Deserialize, Serialize};

/// Row-mutation summary mirrored from the relational driver.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MutationResult {
    #[serde(rename = "affectedRows")]
    pub affected_rows: u64,
    #[serde(rename = "insertId", default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i64>,
}

/// Uniform `{message, result}` envelope returned by every add, delete and
/// status-update endpoint.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    pub result: MutationResult,
}

/// Error body; `message` is the display payload screens surface to the user.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
