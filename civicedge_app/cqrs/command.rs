use async_trait::async_trait;
use civicedge_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, services::Services};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system: remote
/// submissions, the local queue, or the local session.
pub trait Command: Send + Sync {}

/// A trait for handlers that execute Commands.
/// It receives the command and the shared service collaborators.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        services: &Arc<Services>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError>;
}
