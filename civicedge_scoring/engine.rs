use std::collections::HashMap;

use chrono::Utc;

use civicedge_types::report::{Report, ReportStatus};
use civicedge_types::score::{Badge, UserScore};

use crate::badges;

/// Sentinel name for users the directory cannot resolve.
pub const UNKNOWN_USER: &str = "Unknown User";

// Point weights. A report with several media kinds earns every matching
// bonus.
const POINTS_PER_REPORT: u32 = 10;
const POINTS_PER_RESOLVED: u32 = 25;
const POINTS_PER_PHOTO_REPORT: u32 = 5;
const POINTS_PER_VIDEO_REPORT: u32 = 10;
const POINTS_PER_AUDIO_REPORT: u32 = 5;

const POINTS_PER_LEVEL: u32 = 100;

/// Resolves a user id to a display name. The report corpus only carries
/// ids; names come from whatever directory the caller has at hand.
pub trait DisplayNames {
    fn display_name(&self, user_id: &str) -> Option<String>;
}

impl DisplayNames for HashMap<String, String> {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.get(user_id).cloned()
    }
}

/// Derives a user's score, level, and badge set from the full report list.
/// Pure function of its inputs: an empty or foreign report list yields the
/// zero score with no badges. `rank` is left at 0; only a leaderboard
/// computation can assign it.
pub fn compute_user_score(
    user_id: &str,
    all_reports: &[Report],
    directory: &dyn DisplayNames,
) -> UserScore {
    let user_reports: Vec<&Report> = all_reports
        .iter()
        .filter(|report| report.user_id == user_id)
        .collect();

    let total_reports = user_reports.len() as u32;
    let resolved_reports = user_reports
        .iter()
        .filter(|report| report.status == ReportStatus::Resolved)
        .count() as u32;
    let photo_reports = user_reports.iter().filter(|r| r.has_images()).count() as u32;
    let video_reports = user_reports.iter().filter(|r| r.has_videos()).count() as u32;
    let audio_reports = user_reports.iter().filter(|r| r.has_audio_notes()).count() as u32;

    let impact_points = total_reports * POINTS_PER_REPORT
        + resolved_reports * POINTS_PER_RESOLVED
        + photo_reports * POINTS_PER_PHOTO_REPORT
        + video_reports * POINTS_PER_VIDEO_REPORT
        + audio_reports * POINTS_PER_AUDIO_REPORT;

    let level = impact_points / POINTS_PER_LEVEL + 1;

    // Thresholds are independent; any subset can hold at once. Recomputed
    // from scratch each call, so earned_at is the recompute instant.
    let now = Utc::now();
    let mut earned: Vec<Badge> = Vec::new();

    if total_reports >= 1 {
        earned.push(badges::FIRST_REPORT.earned(now));
    }
    if total_reports >= 5 {
        earned.push(badges::FIVE_REPORTS.earned(now));
    }
    if total_reports >= 10 {
        earned.push(badges::TEN_REPORTS.earned(now));
    }
    if photo_reports >= 5 {
        earned.push(badges::PHOTO_REPORTER.earned(now));
    }
    if video_reports >= 3 {
        earned.push(badges::VIDEO_REPORTER.earned(now));
    }

    let user_name = directory
        .display_name(user_id)
        .unwrap_or_else(|| UNKNOWN_USER.to_string());

    UserScore {
        user_id: user_id.to_string(),
        user_name,
        total_reports,
        resolved_reports,
        impact_points,
        level,
        badges: earned,
        rank: 0,
    }
}
