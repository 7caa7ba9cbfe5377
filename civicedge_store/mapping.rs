use civicedge_types::common::User;
use civicedge_types::errors::StoreError;
use civicedge_types::report::{Coordinates, Report, ReportStatus};

use crate::models::{ApiCoordinates, ApiReport, ApiUser};

impl From<ApiCoordinates> for Coordinates {
    fn from(api: ApiCoordinates) -> Self {
        Coordinates {
            latitude: api.latitude,
            longitude: api.longitude,
        }
    }
}

impl From<Coordinates> for ApiCoordinates {
    fn from(coordinates: Coordinates) -> Self {
        ApiCoordinates {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

impl TryFrom<ApiReport> for Report {
    type Error = StoreError;

    fn try_from(api: ApiReport) -> Result<Self, Self::Error> {
        let status = ReportStatus::from_wire(&api.status).ok_or_else(|| {
            StoreError::MalformedPayload(format!("unknown report status {:?}", api.status))
        })?;

        Ok(Report {
            id: api.id,
            user_id: api.user_id,
            title: api.title,
            description: api.description,
            category: api.category,
            location: api.location,
            coordinates: api.coordinates.map(Coordinates::from),
            images: api.images,
            videos: api.videos,
            audio_notes: api.audio_notes,
            status,
            created_at: api.created_at,
        })
    }
}

impl From<ApiUser> for User {
    fn from(api: ApiUser) -> Self {
        User {
            id: api.id,
            full_name: api.full_name,
            email: api.email,
            mobile_number: api.mobile_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mapping_from_wire_json() {
        let json = r#"{
            "_id": "66b2f0",
            "userId": "ada@example.com",
            "title": "Pothole",
            "description": "Deep pothole",
            "category": "Road Issues",
            "location": "Elm Street",
            "coordinates": {"latitude": 45.46, "longitude": 9.18},
            "images": ["a.jpg"],
            "status": "In Progress",
            "createdAt": "2025-05-04T10:00:00Z"
        }"#;

        let api: ApiReport = serde_json::from_str(json).unwrap();
        let report = Report::try_from(api).unwrap();

        assert_eq!(report.id, "66b2f0");
        assert_eq!(report.user_id, "ada@example.com");
        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.images, vec!["a.jpg".to_string()]);
        // Fields the store may omit default to empty.
        assert!(report.videos.is_empty());
        assert!(report.audio_notes.is_empty());
        assert_eq!(report.coordinates.unwrap().latitude, 45.46);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": "1",
            "userId": "u",
            "title": "t",
            "status": "Archived",
            "createdAt": "2025-05-04T10:00:00Z"
        }"#;

        let api: ApiReport = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Report::try_from(api),
            Err(StoreError::MalformedPayload(_))
        ));
    }
}
