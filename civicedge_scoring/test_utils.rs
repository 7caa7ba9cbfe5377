use chrono::Utc;
use uuid::Uuid;

use civicedge_types::report::{Report, ReportStatus};

#[derive(Default, Clone)]
pub struct ReportFactoryOptions<'a> {
    pub user_id: Option<&'a str>,
    pub status: Option<ReportStatus>,
    pub images: usize,
    pub videos: usize,
    pub audio_notes: usize,
}

pub fn report_factory(options: ReportFactoryOptions) -> Report {
    let id = Uuid::new_v4().to_string();

    let refs = |prefix: &str, count: usize| -> Vec<String> {
        (0..count).map(|i| format!("{prefix}-{id}-{i}")).collect()
    };

    Report {
        id: id.clone(),
        user_id: options.user_id.unwrap_or("user-1").to_string(),
        title: "Pothole on Elm Street".to_string(),
        description: "Deep pothole near the bus stop".to_string(),
        category: "Road Issues".to_string(),
        location: "Elm Street 42".to_string(),
        coordinates: None,
        images: refs("img", options.images),
        videos: refs("vid", options.videos),
        audio_notes: refs("aud", options.audio_notes),
        status: options.status.unwrap_or(ReportStatus::New),
        created_at: Utc::now(),
    }
}
