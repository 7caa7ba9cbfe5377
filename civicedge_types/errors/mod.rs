use thiserror::Error;

mod app_error;
mod queue_error;
mod store_error;

pub use app_error::AppError;
pub use queue_error::QueueError;
pub use store_error::StoreError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}

impl ApplicationError {
    /// Whether a failed delivery is worth retrying on a later drain.
    /// Validation and rejected-by-server failures are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ApplicationError::Store(StoreError::Http(_)) => true,
            ApplicationError::Store(StoreError::Status { .. }) => true,
            ApplicationError::Queue(QueueError::Io(_)) => true,
            ApplicationError::Infrastructure(_) => true,
            _ => false,
        }
    }
}
