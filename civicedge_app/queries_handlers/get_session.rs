use async_trait::async_trait;
use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetSession},
    services::Services,
};

pub struct GetSessionHandler {}

impl GetSessionHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetSession> for GetSessionHandler {
    async fn handle(
        &self,
        _query: GetSession,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<<GetSession as Query>::Output, ApplicationError> {
        services.session.load().await
    }
}
