use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the auth endpoints and persisted
/// locally as the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Registration payload for the remote auth service.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
}
