use async_trait::async_trait;
use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetReportsForUser},
    services::Services,
};

pub struct GetReportsForUserHandler {}

impl GetReportsForUserHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetReportsForUser> for GetReportsForUserHandler {
    async fn handle(
        &self,
        query: GetReportsForUser,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<<GetReportsForUser as Query>::Output, ApplicationError> {
        services.reports.reports_for_user(&query.email).await
    }
}
