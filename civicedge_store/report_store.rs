use reqwest::multipart::{Form, Part};

use civicedge_app::repository::ReportStore;
use civicedge_types::errors::{ApplicationError, StoreError};
use civicedge_types::report::{MediaAttachment, Report, ReportDraft};

use crate::client::join_url;
use crate::models::{ApiCoordinates, ApiReport, ApiSubmitResponse};

#[derive(Clone)]
pub struct HttpReportStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportStore {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn attachment_part(attachment: &MediaAttachment) -> Result<Part, ApplicationError> {
        Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)
            .map_err(|e| ApplicationError::Store(StoreError::Http(e)))
    }

    fn submission_form(draft: &ReportDraft) -> Result<Form, ApplicationError> {
        let geo_location = match draft.coordinates {
            Some(coordinates) => serde_json::to_string(&ApiCoordinates::from(coordinates))?,
            None => "null".to_string(),
        };

        let mut form = Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone())
            .text("category", draft.category.clone())
            .text("location", draft.location.clone())
            .text("geoLocation", geo_location)
            .text("userEmail", draft.user_email.clone())
            .text("username", draft.user_name.clone());

        for (field, attachments) in [
            ("images", &draft.images),
            ("videos", &draft.videos),
            ("audioNotes", &draft.audio_notes),
        ] {
            for attachment in attachments {
                form = form.part(field, Self::attachment_part(attachment)?);
            }
        }

        Ok(form)
    }

    async fn fetch_reports(&self, path: &str) -> Result<Vec<Report>, ApplicationError> {
        let response = self
            .client
            .get(join_url(&self.base_url, path))
            .send()
            .await
            .map_err(StoreError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let api_reports: Vec<ApiReport> = response.json().await.map_err(StoreError::Http)?;

        api_reports
            .into_iter()
            .map(|api| Report::try_from(api).map_err(ApplicationError::from))
            .collect()
    }
}

#[async_trait::async_trait]
impl ReportStore for HttpReportStore {
    async fn submit(&self, draft: &ReportDraft) -> Result<(), ApplicationError> {
        let form = Self::submission_form(draft)?;

        let response = self
            .client
            .post(join_url(&self.base_url, "api/reports"))
            .multipart(form)
            .send()
            .await
            .map_err(StoreError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body: ApiSubmitResponse = response.json().await.map_err(StoreError::Http)?;
        if !body.success {
            let reason = body
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(StoreError::Rejected(reason).into());
        }

        tracing::debug!(title = %draft.title, "report accepted by store");
        Ok(())
    }

    async fn reports_for_user(&self, email: &str) -> Result<Vec<Report>, ApplicationError> {
        self.fetch_reports(&format!("api/reports/{email}")).await
    }

    async fn list_all(&self) -> Result<Vec<Report>, ApplicationError> {
        self.fetch_reports("api/reports").await
    }
}
