use async_trait::async_trait;
use civicedge_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, services::Services};

/// A marker trait for Query structs.
/// Queries read system state; scoring queries always recompute from the
/// authoritative report list rather than reading cached counters.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        services: &Arc<Services>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
