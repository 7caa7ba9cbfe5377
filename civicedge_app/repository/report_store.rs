use civicedge_types::errors::ApplicationError;
use civicedge_types::report::{Report, ReportDraft};

/// The remote report store. It owns persistence and status transitions;
/// the client only submits drafts and reads back report lists.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Deliver one draft. A server-side rejection surfaces as
    /// `StoreError::Rejected`; transport failures as `StoreError::Http`.
    async fn submit(&self, draft: &ReportDraft) -> Result<(), ApplicationError>;

    /// Reports submitted by one user, looked up by email.
    async fn reports_for_user(&self, email: &str) -> Result<Vec<Report>, ApplicationError>;

    /// The full report corpus, used for score and leaderboard computation.
    async fn list_all(&self) -> Result<Vec<Report>, ApplicationError>;
}
