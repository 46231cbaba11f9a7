use super::Table;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    /// Argon2 hash; never serialized out of the server.
    pub pw: String,
    pub status: i64,
}

impl From<User> for hogar_api::restful::UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.nombre,
            email: user.email,
            status: user.status,
        }
    }
}

pub struct UsuarioTable;

impl Table for UsuarioTable {
    fn name(&self) -> &'static str {
        "usuario"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS usuario (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                pw TEXT NOT NULL,
                status INTEGER NOT NULL DEFAULT 1
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS usuario;")
    }
}
