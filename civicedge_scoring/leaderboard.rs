use civicedge_types::report::Report;
use civicedge_types::score::LeaderboardEntry;

use crate::engine::{DisplayNames, compute_user_score};

/// Ranks every user appearing in the report corpus by impact points.
/// Users with zero reports never appear. Ties break on higher
/// `total_reports`, then ascending `user_id`, so equal-point users still
/// get distinct, stable ranks.
pub fn build_leaderboard(
    all_reports: &[Report],
    directory: &dyn DisplayNames,
) -> Vec<LeaderboardEntry> {
    let mut user_ids: Vec<&str> = Vec::new();
    for report in all_reports {
        if !user_ids.contains(&report.user_id.as_str()) {
            user_ids.push(&report.user_id);
        }
    }

    let mut scores: Vec<_> = user_ids
        .into_iter()
        .map(|user_id| compute_user_score(user_id, all_reports, directory))
        .collect();

    scores.sort_by(|a, b| {
        b.impact_points
            .cmp(&a.impact_points)
            .then(b.total_reports.cmp(&a.total_reports))
            .then(a.user_id.cmp(&b.user_id))
    });

    scores
        .into_iter()
        .enumerate()
        .map(|(index, score)| LeaderboardEntry {
            user_id: score.user_id,
            user_name: score.user_name,
            impact_points: score.impact_points,
            level: score.level,
            rank: index as u32 + 1,
            badges: score.badges,
        })
        .collect()
}

/// The caller's own rank, or 0 when the user has no leaderboard row.
pub fn user_rank(user_id: &str, leaderboard: &[LeaderboardEntry]) -> u32 {
    leaderboard
        .iter()
        .find(|entry| entry.user_id == user_id)
        .map(|entry| entry.rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use civicedge_types::report::ReportStatus;

    use super::*;
    use crate::test_utils::{ReportFactoryOptions, report_factory};

    fn directory() -> HashMap<String, String> {
        HashMap::from([
            ("u1".to_string(), "Ada".to_string()),
            ("u2".to_string(), "Grace".to_string()),
            ("u3".to_string(), "Edsger".to_string()),
        ])
    }

    fn reports_for(user_id: &str, count: usize, resolved: usize) -> Vec<civicedge_types::report::Report> {
        (0..count)
            .map(|i| {
                report_factory(ReportFactoryOptions {
                    user_id: Some(user_id),
                    status: Some(if i < resolved {
                        ReportStatus::Resolved
                    } else {
                        ReportStatus::New
                    }),
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_ranks_are_contiguous_and_sorted() {
        let mut reports = reports_for("u1", 3, 1);
        reports.extend(reports_for("u2", 7, 2));
        reports.extend(reports_for("u3", 1, 0));

        let board = build_leaderboard(&reports, &directory());

        assert_eq!(board.len(), 3);
        let ranks: Vec<u32> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        for pair in board.windows(2) {
            assert!(pair[0].impact_points >= pair[1].impact_points);
        }
        assert_eq!(board[0].user_id, "u2");
    }

    #[test]
    fn test_zero_report_user_is_absent_with_rank_zero() {
        let reports = reports_for("u1", 2, 0);

        let board = build_leaderboard(&reports, &directory());

        assert!(board.iter().all(|entry| entry.user_id != "u2"));
        assert_eq!(user_rank("u2", &board), 0);
        assert_eq!(user_rank("u1", &board), 1);
    }

    #[test]
    fn test_tie_breaks_on_total_reports_then_user_id() {
        // u1: 2 reports, 1 resolved = 2*10 + 25 = 45 points.
        // u2: 2 reports, 1 resolved = 45 points, identical totals.
        // u3: 1 resolved report with a video = 10 + 25 + 10 = 45 points,
        //     same score but fewer reports.
        let mut reports = reports_for("u2", 2, 1);
        reports.extend(reports_for("u1", 2, 1));
        reports.push(report_factory(ReportFactoryOptions {
            user_id: Some("u3"),
            status: Some(ReportStatus::Resolved),
            videos: 1,
            ..Default::default()
        }));

        let board = build_leaderboard(&reports, &directory());

        let points: Vec<u32> = board.iter().map(|e| e.impact_points).collect();
        assert_eq!(points, vec![45, 45, 45]);

        // More reports wins the tie; equal totals fall back to user id order.
        let order: Vec<&str> = board.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(order, vec!["u1", "u2", "u3"]);
        let ranks: Vec<u32> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_corpus_yields_empty_board() {
        let board = build_leaderboard(&[], &directory());
        assert!(board.is_empty());
    }

    #[test]
    fn test_unknown_users_still_ranked() {
        let reports = reports_for("ghost", 1, 0);

        let board = build_leaderboard(&reports, &HashMap::new());

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_name, crate::engine::UNKNOWN_USER);
    }
}
