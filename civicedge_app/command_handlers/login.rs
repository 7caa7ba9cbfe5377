use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::Login},
    services::Services,
};

pub struct LoginCommandHandler;

impl LoginCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<Login> for LoginCommandHandler {
    async fn handle(
        &self,
        command: Login,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let user = services
            .auth
            .login(&command.email, &command.password)
            .await?;

        services.session.save(&user).await?;
        // Keep the local directory current so the leaderboard can resolve
        // this user's name.
        services.directory.record(&user).await?;

        tracing::info!(user_id = %user.id, "session established");
        Ok(())
    }
}
