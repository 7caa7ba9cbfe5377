use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DismissInstallPrompt},
    services::Services,
};

pub struct DismissInstallPromptCommandHandler;

impl DismissInstallPromptCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<DismissInstallPrompt> for DismissInstallPromptCommandHandler {
    async fn handle(
        &self,
        _command: DismissInstallPrompt,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        services.session.set_install_prompt_dismissed().await
    }
}
