use std::sync::Arc;

use hogar_api::models::DeviceKind;
use sqlx::Error;

use crate::configs::Storage;
use crate::models::Device;

use super::RowsChanged;

/// One repository serves both device tables; `kind` selects the table. The
/// resources share a single statement set apart from the table name, which
/// comes from the `DeviceKind` descriptor and never from user input.
pub struct DeviceRepository {
    storage: Arc<Storage>,
    kind: DeviceKind,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>, kind: DeviceKind) -> Self {
        Self { storage, kind }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub async fn find_all(&self) -> Result<Vec<Device>, Error> {
        let devices = sqlx::query_as(&format!(
            "SELECT * FROM {} ORDER BY id",
            self.kind.table()
        ))
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(devices)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Device>, Error> {
        let device = sqlx::query_as(&format!(
            "SELECT * FROM {} WHERE id = $1",
            self.kind.table()
        ))
        .bind(id)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(device)
    }

    pub async fn create(&self, item: &Device) -> Result<RowsChanged, Error> {
        let result = sqlx::query(&format!(
            "INSERT INTO {} (nombre, cantidad, estado) VALUES ($1, $2, $3)",
            self.kind.table()
        ))
        .bind(&item.nombre)
        .bind(item.cantidad)
        .bind(item.estado)
        .execute(self.storage.get_pool())
        .await?;

        Ok(RowsChanged {
            affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    /// Idempotent by construction: repeating the same `estado` matches the
    /// same row and leaves it unchanged.
    pub async fn update_status(&self, id: i64, estado: bool) -> Result<RowsChanged, Error> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET estado = $1 WHERE id = $2",
            self.kind.table()
        ))
        .bind(estado)
        .bind(id)
        .execute(self.storage.get_pool())
        .await?;

        Ok(RowsChanged {
            affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<RowsChanged, Error> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = $1",
            self.kind.table()
        ))
        .bind(id)
        .execute(self.storage.get_pool())
        .await?;

        Ok(RowsChanged {
            affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }
}
