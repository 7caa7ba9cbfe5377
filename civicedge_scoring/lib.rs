pub mod badges;
pub mod engine;
pub mod leaderboard;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use engine::{DisplayNames, UNKNOWN_USER, compute_user_score};
pub use leaderboard::{build_leaderboard, user_rank};
