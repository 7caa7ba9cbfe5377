use uuid::Uuid;

use civicedge_types::errors::ApplicationError;
use civicedge_types::queue::QueuedReport;

/// Durable local mapping of reports submitted while offline, keyed by
/// `local_id`. Implementations must serialize concurrent read-modify-write
/// cycles; callers rely on `append` during a running drain being safe.
#[async_trait::async_trait]
pub trait PendingQueue: Send + Sync {
    async fn append(&self, report: &QueuedReport) -> Result<(), ApplicationError>;

    /// All pending entries in enqueue order.
    async fn list(&self) -> Result<Vec<QueuedReport>, ApplicationError>;

    /// Removing an absent id is a no-op; a drain may race a manual retry.
    async fn remove(&self, local_id: Uuid) -> Result<(), ApplicationError>;

    async fn len(&self) -> Result<usize, ApplicationError>;
}
