use civicedge_app::repository::AuthGateway;
use civicedge_types::common::{NewUser, User};
use civicedge_types::errors::{AppError, ApplicationError, StoreError};

use crate::client::join_url;
use crate::models::{ApiAuthResponse, ApiLoginRequest, ApiRegisterRequest};

#[derive(Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn post_auth<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<User, ApplicationError> {
        let response = self
            .client
            .post(join_url(&self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(StoreError::Http)?;

        // The auth service reports bad credentials in the body, not the
        // status line.
        let status = response.status();
        if status.is_server_error() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body: ApiAuthResponse = response.json().await.map_err(StoreError::Http)?;
        match body.user {
            Some(user) if body.success => Ok(user.into()),
            _ => {
                if let Some(message) = body.message {
                    tracing::debug!("auth service refused the request: {message}");
                }
                Err(AppError::WrongAuthCredentials.into())
            }
        }
    }
}

#[async_trait::async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApplicationError> {
        self.post_auth(
            "api/auth/login",
            &ApiLoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    async fn register(&self, new_user: &NewUser) -> Result<User, ApplicationError> {
        self.post_auth(
            "api/auth/register",
            &ApiRegisterRequest {
                full_name: new_user.full_name.clone(),
                email: new_user.email.clone(),
                mobile_number: new_user.mobile_number.clone(),
                password: new_user.password.clone(),
            },
        )
        .await
    }
}
