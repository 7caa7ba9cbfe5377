use std::path::PathBuf;

use tokio::sync::Mutex;
use uuid::Uuid;

use civicedge_app::repository::PendingQueue;
use civicedge_types::errors::ApplicationError;
use civicedge_types::queue::QueuedReport;

use crate::disk::{read_json, write_json_atomic};

/// Durable pending-reports queue backed by one JSON file. Entries keep
/// enqueue order; every read-modify-write cycle happens under one async
/// mutex so a drain and a fresh enqueue cannot interleave on the file.
pub struct JsonFileQueue {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileQueue {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<QueuedReport>, ApplicationError> {
        read_json(&self.path).await
    }
}

#[async_trait::async_trait]
impl PendingQueue for JsonFileQueue {
    async fn append(&self, report: &QueuedReport) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut entries = self.load().await?;
        entries.push(report.clone());
        write_json_atomic(&self.path, &entries).await
    }

    async fn list(&self) -> Result<Vec<QueuedReport>, ApplicationError> {
        let _guard = self.guard.lock().await;
        self.load().await
    }

    async fn remove(&self, local_id: Uuid) -> Result<(), ApplicationError> {
        let _guard = self.guard.lock().await;

        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|entry| entry.local_id != local_id);

        if entries.len() != before {
            write_json_atomic(&self.path, &entries).await?;
        }
        Ok(())
    }

    async fn len(&self) -> Result<usize, ApplicationError> {
        let _guard = self.guard.lock().await;
        Ok(self.load().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicedge_types::report::ReportDraft;

    fn temp_queue() -> JsonFileQueue {
        let path = std::env::temp_dir().join(format!("civicedge-queue-{}.json", Uuid::new_v4()));
        JsonFileQueue::new(path)
    }

    fn queued(title: &str) -> QueuedReport {
        QueuedReport::new(ReportDraft {
            title: title.to_string(),
            description: "d".to_string(),
            category: "c".to_string(),
            location: "l".to_string(),
            coordinates: None,
            images: vec![],
            videos: vec![],
            audio_notes: vec![],
            user_email: "ada@example.com".to_string(),
            user_name: "Ada".to_string(),
        })
    }

    #[tokio::test]
    async fn test_append_list_remove_round_trip() {
        let queue = temp_queue();

        let first = queued("first");
        let second = queued("second");
        queue.append(&first).await.unwrap();
        queue.append(&second).await.unwrap();

        let entries = queue.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        // Enqueue order survives the file round trip.
        assert_eq!(entries[0].draft.title, "first");
        assert_eq!(entries[1].draft.title, "second");

        queue.remove(first.local_id).await.unwrap();
        let entries = queue.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].local_id, second.local_id);

        tokio::fs::remove_file(&queue.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_an_empty_queue() {
        let queue = temp_queue();

        assert_eq!(queue.len().await.unwrap(), 0);
        assert!(queue.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_id_is_a_no_op() {
        let queue = temp_queue();
        queue.append(&queued("only")).await.unwrap();

        queue.remove(Uuid::new_v4()).await.unwrap();
        assert_eq!(queue.len().await.unwrap(), 1);

        tokio::fs::remove_file(&queue.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_queue_survives_reopen() {
        let queue = temp_queue();
        let entry = queued("durable");
        queue.append(&entry).await.unwrap();
        let path = queue.path.clone();
        drop(queue);

        let reopened = JsonFileQueue::new(path.clone());
        let entries = reopened.list().await.unwrap();
        assert_eq!(entries, vec![entry]);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_an_error() {
        let queue = temp_queue();
        tokio::fs::write(&queue.path, b"{not json").await.unwrap();

        assert!(queue.list().await.is_err());

        tokio::fs::remove_file(&queue.path).await.unwrap();
    }
}
