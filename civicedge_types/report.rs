use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Lifecycle of a report. Status is owned by the remote report store; the
/// client never moves a report between states on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    New,
    InProgress,
    Resolved,
}

impl ReportStatus {
    /// The store spells the middle state with a space ("In Progress").
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "New" => Some(Self::New),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

/// A report as known to the remote store. Immutable from the client's
/// perspective once submitted; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub audio_notes: Vec<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }

    pub fn has_audio_notes(&self) -> bool {
        !self.audio_notes.is_empty()
    }
}

/// A captured media file attached to a submission, carried inline so a
/// queued report stays self-contained across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A report the user has filled in but the store has not yet accepted.
/// `user_email` and `user_name` are stamped from the active session at
/// submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub images: Vec<MediaAttachment>,
    pub videos: Vec<MediaAttachment>,
    pub audio_notes: Vec<MediaAttachment>,
    pub user_email: String,
    pub user_name: String,
}

impl ReportDraft {
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || !self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_round_trip() {
        for status in [
            ReportStatus::New,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
        ] {
            assert_eq!(ReportStatus::from_wire(status.as_wire()), Some(status));
        }

        assert_eq!(ReportStatus::from_wire("in progress"), None);
        assert_eq!(ReportStatus::from_wire("Closed"), None);
    }
}
