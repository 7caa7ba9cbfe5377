use async_trait::async_trait;
use std::sync::Arc;

use civicedge_scoring::{build_leaderboard, compute_user_score, user_rank};
use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetUserScore},
    services::Services,
};

pub struct GetUserScoreHandler {}

impl GetUserScoreHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetUserScore> for GetUserScoreHandler {
    async fn handle(
        &self,
        query: GetUserScore,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<<GetUserScore as Query>::Output, ApplicationError> {
        // Always recompute from the authoritative report list; the rank
        // only exists relative to the full leaderboard.
        let reports = services.reports.list_all().await?;
        let names = services.directory.display_names().await?;

        let mut score = compute_user_score(&query.user_id, &reports, &names);
        let leaderboard = build_leaderboard(&reports, &names);
        score.rank = user_rank(&query.user_id, &leaderboard);

        Ok(score)
    }
}
