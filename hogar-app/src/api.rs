use hogar_api::models::{Device, DeviceKind};
use hogar_api::restful::{
    ErrorResponse, LoginRequest, MutationResponse, RegisterRequest, UpdateStatusRequest,
    UserResponse,
};
use reqwest::{Client, Response};

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Thin REST client over the backend. One request per user action, no
/// retries, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_devices(&self, kind: DeviceKind) -> Result<Vec<Device>> {
        let response = self
            .http
            .get(format!("{}/api/{}", self.base_url, kind.table()))
            .send()
            .await?;

        Ok(Self::parse(response).await?.json().await?)
    }

    pub async fn set_status(
        &self,
        kind: DeviceKind,
        id: i64,
        estado: bool,
    ) -> Result<MutationResponse> {
        let response = self
            .http
            .put(format!("{}/api/{}/{}", self.base_url, kind.table(), id))
            .json(&UpdateStatusRequest { estado })
            .send()
            .await?;

        Ok(Self::parse(response).await?.json().await?)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<UserResponse> {
        let response = self
            .http
            .post(format!("{}/api/usuario/login", self.base_url))
            .json(request)
            .send()
            .await?;

        Ok(Self::parse(response).await?.json().await?)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MutationResponse> {
        let response = self
            .http
            .post(format!("{}/api/usuario/agregar", self.base_url))
            .json(request)
            .send()
            .await?;

        Ok(Self::parse(response).await?.json().await?)
    }

    /// Map a non-2xx response to `Error::Api`, using the body's `message` as
    /// the display payload when one is present.
    async fn parse(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Error desconocido")
                    .to_string()
            });

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}
