use chrono::{DateTime, Utc};

use civicedge_types::score::Badge;

/// Static description of an earnable badge. The catalog is a fixed design
/// constant; thresholds live next to the checks in the engine.
#[derive(Debug, Clone, Copy)]
pub struct BadgeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl BadgeSpec {
    pub fn earned(&self, at: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            earned_at: at,
        }
    }
}

pub const FIRST_REPORT: BadgeSpec = BadgeSpec {
    id: "first_report",
    name: "First Reporter",
    description: "Submitted your first civic issue report",
    icon: "🎯",
};

pub const FIVE_REPORTS: BadgeSpec = BadgeSpec {
    id: "five_reports",
    name: "Active Citizen",
    description: "Submitted 5 civic issue reports",
    icon: "🏆",
};

pub const TEN_REPORTS: BadgeSpec = BadgeSpec {
    id: "ten_reports",
    name: "Community Champion",
    description: "Submitted 10 civic issue reports",
    icon: "⭐",
};

pub const PHOTO_REPORTER: BadgeSpec = BadgeSpec {
    id: "photo_reporter",
    name: "Visual Reporter",
    description: "Submitted 5 reports with photos",
    icon: "📸",
};

pub const VIDEO_REPORTER: BadgeSpec = BadgeSpec {
    id: "video_reporter",
    name: "Video Journalist",
    description: "Submitted 3 reports with videos",
    icon: "🎥",
};
