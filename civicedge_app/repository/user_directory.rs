use std::collections::HashMap;

use civicedge_types::common::User;
use civicedge_types::errors::ApplicationError;

/// Local directory of users this client has seen, used to resolve display
/// names on the leaderboard. Grows as users authenticate on this device.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Map of user id to display name.
    async fn display_names(&self) -> Result<HashMap<String, String>, ApplicationError>;

    /// Upsert by user id.
    async fn record(&self, user: &User) -> Result<(), ApplicationError>;
}
