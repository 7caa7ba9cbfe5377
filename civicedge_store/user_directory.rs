use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use civicedge_app::repository::UserDirectory;
use civicedge_types::common::User;
use civicedge_types::errors::ApplicationError;

use crate::disk::{read_json, write_json_atomic};

/// The users this device has seen, persisted as a JSON list and used to
/// put display names on leaderboard rows.
pub struct JsonFileUserDirectory {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileUserDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<User>, ApplicationError> {
        read_json(&self.path).await
    }
}

#[async_trait::async_trait]
impl UserDirectory for JsonFileUserDirectory {
    async fn display_names(&self) -> Result<HashMap<String, String>, ApplicationError> {
        let _guard = self.guard.lock().await;

        Ok(self
            .load()
            .await?
            .into_iter()
            .map(|user| (user.id, user.full_name))
            .collect())
    }

    async fn record(&self, user: &User) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut users = self.load().await?;
        match users.iter_mut().find(|known| known.id == user.id) {
            Some(known) => *known = user.clone(),
            None => users.push(user.clone()),
        }
        write_json_atomic(&self.path, &users).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_directory() -> JsonFileUserDirectory {
        let path = std::env::temp_dir().join(format!("civicedge-users-{}.json", Uuid::new_v4()));
        JsonFileUserDirectory::new(path)
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{id}@example.com"),
            mobile_number: String::new(),
        }
    }

    #[tokio::test]
    async fn test_record_is_an_upsert() {
        let directory = temp_directory();

        directory.record(&user("u1", "Ada")).await.unwrap();
        directory.record(&user("u2", "Grace")).await.unwrap();
        directory.record(&user("u1", "Ada Lovelace")).await.unwrap();

        let names = directory.display_names().await.unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names["u1"], "Ada Lovelace");
        assert_eq!(names["u2"], "Grace");

        tokio::fs::remove_file(&directory.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_directory_resolves_nothing() {
        let directory = temp_directory();
        assert!(directory.display_names().await.unwrap().is_empty());
    }
}
