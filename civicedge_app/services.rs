use std::sync::Arc;

use crate::connectivity::ConnectivityMonitor;
use crate::repository::{AuthGateway, PendingQueue, ReportStore, SessionStore, UserDirectory};

/// The external collaborators every handler works against. The remote
/// store is authoritative for reports; everything else is local durable
/// state or a passive signal source.
pub struct Services {
    pub reports: Arc<dyn ReportStore>,
    pub auth: Arc<dyn AuthGateway>,
    pub queue: Arc<dyn PendingQueue>,
    pub session: Arc<dyn SessionStore>,
    pub directory: Arc<dyn UserDirectory>,
    pub connectivity: Arc<ConnectivityMonitor>,
}
