use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RegisterUser},
    services::Services,
};

pub struct RegisterUserCommandHandler;

impl RegisterUserCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterUser> for RegisterUserCommandHandler {
    async fn handle(
        &self,
        command: RegisterUser,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let user = services.auth.register(&command.new_user).await?;

        services.session.save(&user).await?;
        services.directory.record(&user).await?;

        tracing::info!(user_id = %user.id, "account registered, session established");
        Ok(())
    }
}
