use std::sync::Arc;

use civicedge_types::errors::{AppError, ApplicationError};
use civicedge_types::queue::QueuedReport;
use civicedge_types::report::ReportDraft;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SubmitReport},
    services::Services,
};

pub struct SubmitReportCommandHandler;

impl SubmitReportCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

/// Local validation gate: no network call happens until the draft passes.
fn validate(draft: &ReportDraft) -> Result<(), AppError> {
    let required = [
        ("title", &draft.title),
        ("description", &draft.description),
        ("category", &draft.category),
        ("location", &draft.location),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::MissingField { field });
        }
    }

    if !draft.has_media() {
        return Err(AppError::MissingMedia);
    }

    Ok(())
}

#[async_trait::async_trait]
impl CommandHandler<SubmitReport> for SubmitReportCommandHandler {
    async fn handle(
        &self,
        command: SubmitReport,
        services: &Arc<Services>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let user = services
            .session
            .load()
            .await?
            .ok_or(AppError::NotAuthenticated)?;

        let mut draft = command.draft;
        draft.user_email = user.email;
        draft.user_name = user.full_name;

        validate(&draft)?;

        if services.connectivity.is_online() {
            services.reports.submit(&draft).await?;
            tracing::info!(title = %draft.title, "report delivered");
        } else {
            let queued = QueuedReport::new(draft);
            let local_id = queued.local_id;
            services.queue.append(&queued).await?;
            tracing::info!(%local_id, "offline, report queued for background sync");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicedge_types::report::MediaAttachment;

    fn draft_with_media() -> ReportDraft {
        ReportDraft {
            title: "Pothole".to_string(),
            description: "Deep pothole".to_string(),
            category: "Road Issues".to_string(),
            location: "Elm Street".to_string(),
            coordinates: None,
            images: vec![MediaAttachment {
                file_name: "pothole.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8],
            }],
            videos: vec![],
            audio_notes: vec![],
            user_email: String::new(),
            user_name: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        assert!(validate(&draft_with_media()).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut draft = draft_with_media();
        draft.location = "   ".to_string();

        match validate(&draft) {
            Err(AppError::MissingField { field }) => assert_eq!(field, "location"),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_requires_photo_or_video() {
        let mut draft = draft_with_media();
        draft.images.clear();

        assert!(matches!(validate(&draft), Err(AppError::MissingMedia)));

        // An audio note alone does not satisfy the media requirement.
        draft.audio_notes.push(MediaAttachment {
            file_name: "note.ogg".to_string(),
            content_type: "audio/ogg".to_string(),
            bytes: vec![1, 2, 3],
        });
        assert!(matches!(validate(&draft), Err(AppError::MissingMedia)));

        draft.videos.push(MediaAttachment {
            file_name: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            bytes: vec![4, 5, 6],
        });
        assert!(validate(&draft).is_ok());
    }
}
