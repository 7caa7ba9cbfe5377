use civicedge_types::common::User;
use civicedge_types::errors::ApplicationError;

/// Durable local session state: the last authenticated user and the
/// one-time install-prompt flag.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<User>, ApplicationError>;

    async fn save(&self, user: &User) -> Result<(), ApplicationError>;

    async fn clear(&self) -> Result<(), ApplicationError>;

    async fn install_prompt_dismissed(&self) -> Result<bool, ApplicationError>;

    async fn set_install_prompt_dismissed(&self) -> Result<(), ApplicationError>;
}
