use std::sync::Arc;

use civicedge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    services::Services,
};

/// AppBus (Mediator)
/// Central entry point for all application operations. It holds no
/// business logic itself; it hands each command or query to its handler
/// together with the shared services.
pub struct AppBus {
    config: Arc<Config>,
    services: Arc<Services>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, services: Arc<Services>) -> Self {
        Self { config, services }
    }

    pub fn services(&self) -> &Arc<Services> {
        &self.services
    }

    /// Executes a command, an operation that modifies system state.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        handler.handle(cmd, &self.services, &self.config).await
    }

    /// Executes a query. Queries never modify state; score and leaderboard
    /// queries recompute from the current report snapshot every time.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler.handle(query, &self.services, &self.config).await
    }
}
