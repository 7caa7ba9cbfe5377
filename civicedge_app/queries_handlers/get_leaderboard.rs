use async_trait::async_trait;
use std::sync::Arc;

use civicedge_scoring::build_leaderboard;
use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetLeaderboard},
    services::Services,
};

pub struct GetLeaderboardHandler {}

impl GetLeaderboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetLeaderboard> for GetLeaderboardHandler {
    async fn handle(
        &self,
        _query: GetLeaderboard,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<<GetLeaderboard as Query>::Output, ApplicationError> {
        let reports = services.reports.list_all().await?;
        let names = services.directory.display_names().await?;

        Ok(build_leaderboard(&reports, &names))
    }
}
