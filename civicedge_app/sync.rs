use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

use civicedge_types::errors::ApplicationError;

use crate::{config::Config, connectivity::ConnectivityState, services::Services};

/// Outcome of one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub delivered: usize,
    pub failed: usize,
    pub deferred: usize,
}

struct RetryState {
    attempts: u32,
    not_before: DateTime<Utc>,
}

/// Replays queued offline submissions into the report store. Drains run
/// when connectivity comes back and on a periodic tick; a single drain is
/// in flight at any moment, so a reconnect racing the tick cannot double
/// deliver within one process.
///
/// Delivery is at-least-once: an entry is only removed after the store
/// acknowledged it, so an acknowledgement lost in transit means the next
/// drain submits the same report again.
pub struct SyncWorker {
    services: Arc<Services>,
    config: Arc<Config>,
    drain_lock: Mutex<()>,
    // Backoff bookkeeping is in-memory only; a restart retries everything
    // immediately, which at-least-once delivery already tolerates.
    retries: Mutex<HashMap<Uuid, RetryState>>,
}

impl SyncWorker {
    pub fn new(services: Arc<Services>, config: Arc<Config>) -> Self {
        Self {
            services,
            config,
            drain_lock: Mutex::new(()),
            retries: Mutex::new(HashMap::new()),
        }
    }

    /// Run worker loop inside a tokio task.
    pub fn run(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut connectivity = self.services.connectivity.subscribe();
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.config.sync_interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            tracing::info!("sync worker started");

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if self.services.connectivity.is_online() {
                            if let Err(e) = self.drain().await {
                                tracing::error!("error while draining pending reports: {e}");
                            }
                        }
                    }
                    changed = connectivity.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        if *connectivity.borrow_and_update() == ConnectivityState::Online {
                            if let Err(e) = self.drain().await {
                                tracing::error!("error while draining pending reports: {e}");
                            }
                        }
                    }
                }
            }
        });
    }

    /// Attempt delivery of every due queued entry. Failures stay queued
    /// for a later pass; a concurrent drain trigger is a no-op.
    pub async fn drain(&self) -> Result<DrainReport, ApplicationError> {
        let Ok(_guard) = self.drain_lock.try_lock() else {
            return Ok(DrainReport::default());
        };

        let pending = self.services.queue.list().await?;
        if pending.is_empty() {
            return Ok(DrainReport::default());
        }

        tracing::info!(pending = pending.len(), "draining pending reports");
        let mut outcome = DrainReport::default();
        let now = Utc::now();

        for entry in pending {
            if !self.is_due(entry.local_id, now).await {
                outcome.deferred += 1;
                continue;
            }

            match self.services.reports.submit(&entry.draft).await {
                Ok(()) => {
                    self.services.queue.remove(entry.local_id).await?;
                    self.retries.lock().await.remove(&entry.local_id);
                    outcome.delivered += 1;
                    tracing::info!(local_id = %entry.local_id, "queued report delivered");
                }
                Err(e) => {
                    let delay = self.schedule_retry(entry.local_id).await;
                    outcome.failed += 1;
                    if e.is_transient() {
                        tracing::warn!(
                            local_id = %entry.local_id,
                            retry_in = ?delay,
                            "delivery failed: {e}"
                        );
                    } else {
                        tracing::error!(
                            local_id = %entry.local_id,
                            retry_in = ?delay,
                            "delivery rejected: {e}"
                        );
                    }
                }
            }
        }

        Ok(outcome)
    }

    async fn is_due(&self, local_id: Uuid, now: DateTime<Utc>) -> bool {
        self.retries
            .lock()
            .await
            .get(&local_id)
            .map(|retry| retry.not_before <= now)
            .unwrap_or(true)
    }

    /// Capped exponential backoff with a little jitter so a flapping
    /// connection does not hammer the store in lockstep.
    async fn schedule_retry(&self, local_id: Uuid) -> Duration {
        let mut retries = self.retries.lock().await;
        let retry = retries.entry(local_id).or_insert(RetryState {
            attempts: 0,
            not_before: Utc::now(),
        });
        retry.attempts = retry.attempts.saturating_add(1);

        let base = self.config.backoff_base_secs;
        let exponential = base.saturating_mul(1u64 << (retry.attempts - 1).min(16));
        let capped = exponential.min(self.config.backoff_max_secs);
        let jitter = rand::thread_rng().gen_range(0..=base);

        let delay = Duration::from_secs(capped + jitter);
        retry.not_before = Utc::now() + chrono::Duration::seconds((capped + jitter) as i64);
        delay
    }
}
