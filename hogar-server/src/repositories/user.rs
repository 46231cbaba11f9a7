use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::User;

use super::RowsChanged;

pub struct UserRepository {
    storage: Arc<Storage>,
}

impl UserRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as("SELECT * FROM usuario ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as("SELECT * FROM usuario WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as("SELECT * FROM usuario WHERE email = $1")
            .bind(email)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }

    pub async fn create(&self, item: &User) -> Result<RowsChanged, Error> {
        let result = sqlx::query(
            "INSERT INTO usuario (nombre, email, pw, status) VALUES ($1, $2, $3, $4)",
        )
        .bind(&item.nombre)
        .bind(&item.email)
        .bind(&item.pw)
        .bind(item.status)
        .execute(self.storage.get_pool())
        .await?;

        Ok(RowsChanged {
            affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<RowsChanged, Error> {
        let result = sqlx::query("DELETE FROM usuario WHERE id = $1")
            .bind(id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(RowsChanged {
            affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }
}
