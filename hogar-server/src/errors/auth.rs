use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("El correo ya está registrado")]
    EmailExists,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("Credenciales incorrectas")]
    InvalidPassword,

    #[error("Campos incompletos")]
    InvalidRequest,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AuthError::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}
