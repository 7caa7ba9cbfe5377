use async_trait::async_trait;
use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GetQueueStatus, QueueStatus},
    },
    services::Services,
};

pub struct GetQueueStatusHandler {}

impl GetQueueStatusHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetQueueStatus> for GetQueueStatusHandler {
    async fn handle(
        &self,
        _query: GetQueueStatus,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<<GetQueueStatus as Query>::Output, ApplicationError> {
        let entries = services.queue.list().await?;

        Ok(QueueStatus {
            pending: entries.len(),
            oldest_enqueued_at: entries.iter().map(|e| e.enqueued_at).min(),
        })
    }
}
