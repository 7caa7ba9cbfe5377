use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use civicedge_app::repository::SessionStore;
use civicedge_types::common::User;
use civicedge_types::errors::ApplicationError;

use crate::disk::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    user: Option<User>,
    #[serde(default)]
    install_prompt_dismissed: bool,
}

/// Session state in one JSON file: the last authenticated user plus the
/// one-time install-prompt flag. The flag deliberately survives logout.
pub struct JsonFileSessionStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    async fn load_file(&self) -> Result<SessionFile, ApplicationError> {
        read_json(&self.path).await
    }
}

#[async_trait::async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self) -> Result<Option<User>, ApplicationError> {
        let _guard = self.guard.lock().await;
        Ok(self.load_file().await?.user)
    }

    async fn save(&self, user: &User) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut state = self.load_file().await?;
        state.user = Some(user.clone());
        write_json_atomic(&self.path, &state).await
    }

    async fn clear(&self) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut state = self.load_file().await?;
        state.user = None;
        write_json_atomic(&self.path, &state).await
    }

    async fn install_prompt_dismissed(&self) -> Result<bool, ApplicationError> {
        let _guard = self.guard.lock().await;
        Ok(self.load_file().await?.install_prompt_dismissed)
    }

    async fn set_install_prompt_dismissed(&self) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut state = self.load_file().await?;
        state.install_prompt_dismissed = true;
        write_json_atomic(&self.path, &state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> JsonFileSessionStore {
        let path = std::env::temp_dir().join(format!("civicedge-session-{}.json", Uuid::new_v4()));
        JsonFileSessionStore::new(path)
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mobile_number: "5550100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let store = temp_store();

        assert_eq!(store.load().await.unwrap(), None);

        store.save(&user()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        tokio::fs::remove_file(&store.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_install_prompt_flag_survives_logout() {
        let store = temp_store();

        assert!(!store.install_prompt_dismissed().await.unwrap());
        store.save(&user()).await.unwrap();
        store.set_install_prompt_dismissed().await.unwrap();
        store.clear().await.unwrap();

        assert!(store.install_prompt_dismissed().await.unwrap());

        tokio::fs::remove_file(&store.path).await.unwrap();
    }
}
