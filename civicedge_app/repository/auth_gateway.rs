use civicedge_types::common::{NewUser, User};
use civicedge_types::errors::ApplicationError;

/// The remote authentication service. Credential checks happen server
/// side; bad credentials come back as `AppError::WrongAuthCredentials`.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApplicationError>;

    async fn register(&self, new_user: &NewUser) -> Result<User, ApplicationError>;
}
