use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::Logout},
    services::Services,
};

pub struct LogoutCommandHandler;

impl LogoutCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<Logout> for LogoutCommandHandler {
    async fn handle(
        &self,
        _command: Logout,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        services.session.clear().await
    }
}
