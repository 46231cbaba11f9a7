use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Client configuration. The backend base URL comes from the environment,
/// falling back to the local development server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_url =
            env::var("HOGAR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self { api_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
