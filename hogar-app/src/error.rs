use thiserror::Error;

/// Client-side failure taxonomy. Validation failures never touch the
/// network; transport failures come from the HTTP stack; `Api` carries the
/// backend's display message for a non-2xx response.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty required field, caught before any request is issued.
    #[error("{0}")]
    Validation(String),

    /// Transport-level failure: connection refused, timeout, malformed body.
    #[error("Error de conexión: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the backend's display payload.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body reports the operation did not happen.
    #[error("{0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
