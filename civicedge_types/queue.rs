use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::report::ReportDraft;

/// A submission held locally pending delivery to the report store.
/// `local_id` is a client-generated temporary id; the store assigns the
/// real one when the entry is eventually delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedReport {
    pub local_id: Uuid,
    pub enqueued_at: DateTime<Utc>,
    pub draft: ReportDraft,
}

impl QueuedReport {
    pub fn new(draft: ReportDraft) -> Self {
        Self {
            local_id: Uuid::new_v4(),
            enqueued_at: Utc::now(),
            draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReportDraft {
        ReportDraft {
            title: "Broken streetlight".to_string(),
            description: "Lamp out on the corner".to_string(),
            category: "Street Lighting".to_string(),
            location: "5th and Main".to_string(),
            coordinates: None,
            images: vec![],
            videos: vec![],
            audio_notes: vec![],
            user_email: "ada@example.com".to_string(),
            user_name: "Ada".to_string(),
        }
    }

    #[test]
    fn test_new_stamps_distinct_local_ids() {
        let before = Utc::now();
        let a = QueuedReport::new(draft());
        let b = QueuedReport::new(draft());
        let after = Utc::now();

        assert_ne!(a.local_id, b.local_id);
        assert!(a.enqueued_at >= before && a.enqueued_at <= after);
        assert_eq!(a.draft, b.draft);
    }
}
