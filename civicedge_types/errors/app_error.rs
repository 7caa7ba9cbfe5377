use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wrong authentication credentials")]
    WrongAuthCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Live photos or videos are required")]
    MissingMedia,

    #[error("{capability} access was denied")]
    PermissionDenied { capability: &'static str },

    #[error("{capability} is not available on this device")]
    UnsupportedCapability { capability: &'static str },
}
