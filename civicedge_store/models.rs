use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shapes of the remote API. The store speaks camelCase JSON and
/// spells report status as free strings; mapping.rs converts to and from
/// the domain types.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReport {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<ApiCoordinates>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio_notes: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegisterRequest {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
}
