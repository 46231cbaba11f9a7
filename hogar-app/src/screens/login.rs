use hogar_api::restful::{LoginRequest, RegisterRequest};

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::session::Session;

pub const EMPTY_FIELDS: &str = "Campos Vacíos";
pub const REGISTER_FAILED: &str = "No se pudo crear la cuenta";

/// Login form: validates locally, then exchanges credentials for a session.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Empty required fields never reach the network.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(Error::Validation(EMPTY_FIELDS.to_string()));
        }

        Ok(())
    }

    pub async fn submit(&self, client: &ApiClient) -> Result<Session> {
        self.validate()?;

        let user = client
            .login(&LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })
            .await?;

        Ok(Session::new(user))
    }
}

/// Registration form. A 2xx response with `affectedRows == 0` still counts
/// as a failure: no account row was written, so no navigation happens.
#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<()> {
        if self.nombre.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(Error::Validation(EMPTY_FIELDS.to_string()));
        }

        Ok(())
    }

    pub async fn submit(&self, client: &ApiClient) -> Result<()> {
        self.validate()?;

        let response = client
            .register(&RegisterRequest {
                nombre: self.nombre.clone(),
                email: self.email.clone(),
                pw: self.password.clone(),
                status: 1,
            })
            .await?;

        if response.result.affected_rows == 0 {
            return Err(Error::Rejected(REGISTER_FAILED.to_string()));
        }

        Ok(())
    }
}
