use std::sync::Arc;
use std::time::Duration;

use civicedge_app::{
    bus::AppBus,
    config::Config,
    connectivity::{ConnectivityMonitor, ConnectivityProbe, ConnectivityState, spawn_prober},
    cqrs::queries::{GetQueueStatus, GetSession},
    queries_handlers::{GetQueueStatusHandler, GetSessionHandler},
    services::Services,
    sync::SyncWorker,
};
use civicedge_store::{
    HttpAuthGateway, HttpProbe, HttpReportStore, JsonFileQueue, JsonFileSessionStore,
    JsonFileUserDirectory, build_http_client,
};
use civicedge_types::errors::{ApplicationError, QueueError, Result};

mod logs;
use logs::setup_logging;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, bus, worker) = setup_agent().await?;

    let status = bus
        .query(GetQueueStatus, GetQueueStatusHandler::new())
        .await?;
    if status.pending > 0 {
        tracing::info!(
            pending = status.pending,
            oldest = ?status.oldest_enqueued_at,
            "pending reports waiting for sync"
        );
    }

    match bus.query(GetSession, GetSessionHandler::new()).await? {
        Some(user) => tracing::info!(user_id = %user.id, "session restored"),
        None => tracing::info!("no persisted session"),
    }

    worker.run();
    tracing::info!(api = %config.api_base_url, "sync agent started");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
    tracing::info!("shutting down");
    Ok(())
}

async fn setup_agent() -> Result<(Arc<Config>, AppBus, Arc<SyncWorker>), ApplicationError> {
    let config = Arc::new(Config::from_env());

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .map_err(QueueError::Io)?;

    let client = build_http_client(Duration::from_secs(config.http_timeout_secs))?;
    let probe: Arc<dyn ConnectivityProbe> =
        Arc::new(HttpProbe::new(client.clone(), &config.api_base_url));

    // Startup state comes from one immediate probe, the agent's stand-in
    // for platform-reported connectivity.
    let initial = if probe.check().await {
        ConnectivityState::Online
    } else {
        ConnectivityState::Offline
    };
    let monitor = Arc::new(ConnectivityMonitor::new(initial));
    tracing::info!(state = ?initial, "initial connectivity");

    spawn_prober(
        monitor.clone(),
        probe,
        Duration::from_secs(config.probe_interval_secs),
    );

    let services = Arc::new(Services {
        reports: Arc::new(HttpReportStore::new(client.clone(), &config.api_base_url)),
        auth: Arc::new(HttpAuthGateway::new(client, &config.api_base_url)),
        queue: Arc::new(JsonFileQueue::new(config.queue_path())),
        session: Arc::new(JsonFileSessionStore::new(config.session_path())),
        directory: Arc::new(JsonFileUserDirectory::new(config.users_path())),
        connectivity: monitor,
    });

    let worker = Arc::new(SyncWorker::new(services.clone(), config.clone()));
    let bus = AppBus::new(config.clone(), services);

    Ok((config, bus, worker))
}
