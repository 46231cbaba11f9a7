use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A toggleable row of the `luces` or `puertas` table.
///
/// Field names double as the wire format and the column names, so they stay
/// in the domain language (`nombre`, `cantidad`, `estado`).
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Row identifier, assigned by storage.
    pub id: i64,
    /// Display name.
    pub nombre: String,
    /// Optional count attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<i64>,
    /// Boolean state: on/off for lights, open/closed for doors.
    pub estado: bool,
}

/// Resource descriptor shared by every device endpoint and screen.
///
/// Each kind maps to exactly one relational table and one `/api/{table}`
/// router; the two resources differ in nothing but this descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Door,
}

impl DeviceKind {
    /// Backing table name, which doubles as the URL path segment.
    pub fn table(&self) -> &'static str {
        match self {
            DeviceKind::Light => "luces",
            DeviceKind::Door => "puertas",
        }
    }

    /// Capitalized singular noun for user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            DeviceKind::Light => "Luz",
            DeviceKind::Door => "Puerta",
        }
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.table())
    }
}
