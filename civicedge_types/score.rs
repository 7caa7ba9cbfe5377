use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named achievement unlocked by crossing a report-activity threshold.
/// Badges are derived from the current report set on every computation, so
/// `earned_at` reflects the computation instant, not the true first unlock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned_at: DateTime<Utc>,
}

/// Fully derived from the user's reports; holds no state of its own.
/// `rank` is only meaningful in the context of a leaderboard computation
/// and stays 0 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScore {
    pub user_id: String,
    pub user_name: String,
    pub total_reports: u32,
    pub resolved_reports: u32,
    pub impact_points: u32,
    pub level: u32,
    pub badges: Vec<Badge>,
    pub rank: u32,
}

/// One leaderboard row, a projection of [`UserScore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub user_name: String,
    pub impact_points: u32,
    pub level: u32,
    pub rank: u32,
    pub badges: Vec<Badge>,
}
