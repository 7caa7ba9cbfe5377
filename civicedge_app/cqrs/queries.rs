use chrono::{DateTime, Utc};

use civicedge_types::common::User;
use civicedge_types::report::Report;
use civicedge_types::score::{LeaderboardEntry, UserScore};

use crate::cqrs::Query;

/// Compute the score, level, badges, and current leaderboard rank for one
/// user from the authoritative report list.
pub struct GetUserScore {
    pub user_id: String,
}

impl Query for GetUserScore {
    type Output = UserScore;
}

/// Compute the full ranked leaderboard over all users with reports.
pub struct GetLeaderboard;

impl Query for GetLeaderboard {
    type Output = Vec<LeaderboardEntry>;
}

/// Fetch the reports one user has submitted, by email.
pub struct GetReportsForUser {
    pub email: String,
}

impl Query for GetReportsForUser {
    type Output = Vec<Report>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueStatus {
    pub pending: usize,
    pub oldest_enqueued_at: Option<DateTime<Utc>>,
}

/// Inspect the offline queue.
pub struct GetQueueStatus;

impl Query for GetQueueStatus {
    type Output = QueueStatus;
}

/// The persisted session user, if any.
pub struct GetSession;

impl Query for GetSession {
    type Output = Option<User>;
}
