use thiserror::Error;

/// Errors talking to the remote report store and auth service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("report store returned HTTP {status}")]
    Status { status: u16 },

    #[error("report store rejected the request: {0}")]
    Rejected(String),

    #[error("malformed report store payload: {0}")]
    MalformedPayload(String),
}
