use hogar_api::models::DeviceKind;

use super::Table;

/// A row of `luces` or `puertas`; the two tables share one shape.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Device {
    pub id: i64,
    pub nombre: String,
    pub cantidad: Option<i64>,
    pub estado: bool,
}

impl From<Device> for hogar_api::models::Device {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            nombre: device.nombre,
            cantidad: device.cantidad,
            estado: device.estado,
        }
    }
}

/// One table definition covers both device tables, parameterized by kind.
#[derive(Clone)]
pub struct DeviceTable {
    kind: DeviceKind,
}

impl DeviceTable {
    pub fn new(kind: DeviceKind) -> Self {
        Self { kind }
    }
}

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        self.kind.table()
    }

    fn create(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                cantidad INTEGER,
                estado BOOLEAN NOT NULL DEFAULT 0
            );
            "#,
            self.kind.table()
        )
    }

    fn dispose(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", self.kind.table())
    }
}
